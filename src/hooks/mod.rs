pub mod info;
pub mod return_path;

use std::sync::Arc;

use async_trait::async_trait;

use info::{TemplateCreated, TemplateDeleted, TemplateRead, TemplateUpdated};

/// Host extension points a module binds to at install time. The tab-2
/// render extension is called directly by the edit view and has no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPoint {
    TemplateCreated,
    TemplateDeleted,
    TemplateUpdated,
    TemplateRead,
}

impl HookPoint {
    pub const ALL: [HookPoint; 4] = [
        HookPoint::TemplateCreated,
        HookPoint::TemplateDeleted,
        HookPoint::TemplateUpdated,
        HookPoint::TemplateRead,
    ];

    pub fn hook_type(&self) -> &'static str {
        "code"
    }

    pub fn action_location(&self) -> &'static str {
        "end"
    }

    /// Host function the hook is attached to.
    pub fn function_name(&self) -> &'static str {
        match self {
            HookPoint::TemplateCreated => "ft_create_blank_email_template",
            HookPoint::TemplateDeleted => "ft_delete_email_template",
            HookPoint::TemplateUpdated => "ft_update_email_template",
            HookPoint::TemplateRead => "ft_get_email_template",
        }
    }

    /// Module callback recorded for the binding.
    pub fn hook_function(&self) -> &'static str {
        match self {
            HookPoint::TemplateCreated => "swift_map_email_template_field",
            HookPoint::TemplateDeleted => "swift_delete_email_template_field",
            HookPoint::TemplateUpdated => "swift_update_email_template_append_extra_fields",
            HookPoint::TemplateRead => "swift_get_email_template_append_extra_fields",
        }
    }
}

/// Email template lifecycle callbacks. Every method defaults to a no-op so a
/// module only overrides the events it cares about.
#[async_trait]
pub trait EmailTemplateHooks: Send + Sync {
    fn module_folder(&self) -> &str;

    async fn template_created(&self, _info: &TemplateCreated) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn template_deleted(&self, _info: &TemplateDeleted) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn template_updated(&self, _info: &TemplateUpdated) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn template_read(&self, info: TemplateRead) -> Result<TemplateRead, sqlx::Error> {
        Ok(info)
    }

    /// Extra rows for the second tab of the template edit page.
    fn edit_template_tab2(&self, _info: &TemplateRead) -> String {
        String::new()
    }
}

/// Typed callback table the host dispatches template events through.
pub struct HookTable {
    bindings: Vec<Arc<dyn EmailTemplateHooks>>,
}

impl HookTable {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn register(&mut self, hooks: Arc<dyn EmailTemplateHooks>) {
        tracing::debug!("Registered template hooks for {}", hooks.module_folder());
        self.bindings.push(hooks);
    }

    pub async fn template_created(&self, info: &TemplateCreated) -> Result<(), sqlx::Error> {
        for hooks in &self.bindings {
            tracing::debug!(email_id = info.email_id, "{}: template created", hooks.module_folder());
            hooks.template_created(info).await?;
        }
        Ok(())
    }

    pub async fn template_deleted(&self, info: &TemplateDeleted) -> Result<(), sqlx::Error> {
        for hooks in &self.bindings {
            tracing::debug!(email_id = info.email_id, "{}: template deleted", hooks.module_folder());
            hooks.template_deleted(info).await?;
        }
        Ok(())
    }

    pub async fn template_updated(&self, info: &TemplateUpdated) -> Result<(), sqlx::Error> {
        for hooks in &self.bindings {
            tracing::debug!(email_id = info.email_id, "{}: template updated", hooks.module_folder());
            hooks.template_updated(info).await?;
        }
        Ok(())
    }

    /// Threads the template info through every binding in registration order.
    pub async fn template_read(&self, mut info: TemplateRead) -> Result<TemplateRead, sqlx::Error> {
        for hooks in &self.bindings {
            info = hooks.template_read(info).await?;
        }
        Ok(info)
    }

    pub fn edit_template_tab2(&self, info: &TemplateRead) -> String {
        self.bindings
            .iter()
            .map(|hooks| hooks.edit_template_tab2(info))
            .collect()
    }
}

impl Default for HookTable {
    fn default() -> Self {
        Self::new()
    }
}

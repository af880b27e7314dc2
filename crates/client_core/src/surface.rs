//! Injected UI capabilities.
//!
//! In the browser original each action owned a trigger element, a loading
//! indicator, an error region and a result region, addressed by id. Here
//! those DOM side effects become a trait so the lifecycle logic runs against
//! a real page, a terminal, or a recording fake in tests. Each action owns
//! its own surface exclusively; concurrent actions never share one.

/// The display side of one action: feedback regions, loading indicator and
/// trigger element.
pub trait ActionSurface: Send + Sync {
    /// Clears any error or result left over from a previous run.
    fn clear_feedback(&self);

    /// Shows or hides the loading indicator.
    fn set_loading(&self, visible: bool);

    /// Enables or disables the action's trigger element.
    fn set_trigger_enabled(&self, enabled: bool);

    /// Injects result markup into the result region.
    fn show_result(&self, html: &str);

    /// Injects error markup into the error region.
    fn show_error(&self, html: &str);
}

/// Raw form field values as read at submission time, unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFormInput {
    pub user_id: String,
    pub title: String,
    pub body: String,
}

/// Surface for the create action, which additionally owns the post form.
pub trait CreateFormSurface: ActionSurface {
    fn read_form(&self) -> PostFormInput;

    /// Empties the form fields. Called only after a successful create.
    fn reset_form(&self);
}

/// Surface for the delete action, which additionally owns the id input.
pub trait DeleteFormSurface: ActionSurface {
    fn read_post_id(&self) -> String;
}

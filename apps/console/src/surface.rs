//! Terminal-backed surface: result and error markup go to stdout/stderr,
//! the loading indicator becomes a status line, and the trigger element has
//! no terminal equivalent in a one-shot invocation.

use client_core::{ActionSurface, CreateFormSurface, DeleteFormSurface, PostFormInput};

pub struct ConsoleSurface {
    action: &'static str,
    form: PostFormInput,
    post_id: String,
}

impl ConsoleSurface {
    pub fn new(action: &'static str) -> Self {
        Self {
            action,
            form: PostFormInput::default(),
            post_id: String::new(),
        }
    }

    pub fn with_form(form: PostFormInput) -> Self {
        let mut surface = Self::new("POST");
        surface.form = form;
        surface
    }

    pub fn with_post_id(post_id: String) -> Self {
        let mut surface = Self::new("DELETE");
        surface.post_id = post_id;
        surface
    }
}

impl ActionSurface for ConsoleSurface {
    fn clear_feedback(&self) {}

    fn set_loading(&self, visible: bool) {
        if visible {
            println!("[{}] Carregando...", self.action);
        }
    }

    fn set_trigger_enabled(&self, _enabled: bool) {}

    fn show_result(&self, html: &str) {
        println!("{html}");
    }

    fn show_error(&self, html: &str) {
        eprintln!("{html}");
    }
}

impl CreateFormSurface for ConsoleSurface {
    fn read_form(&self) -> PostFormInput {
        self.form.clone()
    }

    fn reset_form(&self) {}
}

impl DeleteFormSurface for ConsoleSurface {
    fn read_post_id(&self) -> String {
        self.post_id.clone()
    }
}

use dioxus::prelude::{use_signal, Signal};

use crate::domain::rules::validation::FieldRules;
use crate::usecase::session::Session;

pub struct AppState {
    pub session: Signal<Session>,
    pub busy: Signal<bool>,
}

impl AppState {
    pub fn new(rules: FieldRules) -> Self {
        Self {
            session: use_signal(move || Session::new(rules)),
            busy: use_signal(|| false),
        }
    }
}

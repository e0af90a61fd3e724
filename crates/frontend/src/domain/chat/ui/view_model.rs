//! Chat widget - View Model

use super::model::send_chat;
use contracts::domain::chat::{ChatController, ChatMessage};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct ChatWidgetVm {
    pub controller: RwSignal<ChatController>,
    pub input: RwSignal<String>,
    pub is_open: RwSignal<bool>,
}

impl ChatWidgetVm {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(ChatController::new()),
            input: RwSignal::new(String::new()),
            is_open: RwSignal::new(false),
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.controller.with(|c| c.messages().to_vec())
    }

    pub fn is_loading(&self) -> bool {
        self.controller.with(|c| c.is_loading())
    }

    pub fn can_send(&self) -> bool {
        let input = self.input.get();
        self.controller.with(|c| c.can_submit(&input))
    }

    pub fn toggle(&self) {
        self.is_open.update(|open| *open = !*open);
    }

    /// Submit the current input. `on_settled` runs after the reply is appended.
    pub fn send(&self, on_settled: impl Fn() + 'static) {
        let input = self.input.get_untracked();
        let mut request = None;
        self.controller.update(|c| request = c.submit(&input));
        let Some(request) = request else {
            return;
        };
        self.input.set(String::new());
        on_settled();

        let controller = self.controller;
        spawn_local(async move {
            let outcome = send_chat(&request).await;
            if let Err(e) = &outcome {
                log::warn!("chat request failed: {}", e);
            }
            controller.update(|c| c.complete(outcome));
            on_settled();
        });
    }
}

impl Default for ChatWidgetVm {
    fn default() -> Self {
        Self::new()
    }
}

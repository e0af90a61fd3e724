//! Chat widget - View Component

use super::view_model::ChatWidgetVm;
use crate::shared::icons::icon;
use contracts::domain::chat::ChatRole;
use leptos::prelude::*;

/// Floating assistant button with a chat panel.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let vm = ChatWidgetVm::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let send = move || vm.send(scroll_to_bottom);

    view! {
        <div class="chat-widget">
            <Show when=move || vm.is_open.get()>
                <div class="chat-panel" role="dialog" aria-label="Chat with Badrish AI">
                    <div class="chat-header">
                        <span class="chat-title">
                            {icon("bot")}
                            " Badrish AI"
                        </span>
                        <button class="icon-btn" aria-label="Close chat" on:click=move |_| vm.is_open.set(false)>
                            {icon("close")}
                        </button>
                    </div>

                    <div class="chat-messages" node_ref=messages_ref>
                        {move || {
                            vm.messages()
                                .into_iter()
                                .map(|msg| {
                                    let class = match (msg.role, msg.is_error) {
                                        (ChatRole::User, _) => "chat-bubble user",
                                        (ChatRole::Model, true) => "chat-bubble model error",
                                        (ChatRole::Model, false) => "chat-bubble model",
                                    };
                                    view! { <div class=class>{msg.text}</div> }
                                })
                                .collect_view()
                        }}
                        <Show when=move || vm.is_loading()>
                            <div class="chat-bubble model typing" aria-label="Assistant is typing">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </Show>
                    </div>

                    <form
                        class="chat-input"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            send();
                        }
                    >
                        <input
                            type="text"
                            placeholder="Ask about projects, skills..."
                            prop:value=move || vm.input.get()
                            on:input=move |ev| vm.input.set(event_target_value(&ev))
                            disabled=move || vm.is_loading()
                        />
                        <button type="submit" class="icon-btn" aria-label="Send" disabled=move || !vm.can_send()>
                            {icon("send")}
                        </button>
                    </form>
                </div>
            </Show>

            <button
                class="chat-fab"
                aria-label=move || if vm.is_open.get() { "Close chat" } else { "Open chat" }
                on:click=move |_| {
                    vm.toggle();
                    scroll_to_bottom();
                }
            >
                {move || if vm.is_open.get() { icon("close") } else { icon("message") }}
            </button>
        </div>
    }
}

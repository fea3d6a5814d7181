use crate::api::Comment;
use crate::components::Icon;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn CommentPanel() -> Element {
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut draft = use_signal(String::new);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let Some(comment) = Comment::from_input(&draft.peek()) else {
            return;
        };
        debug!(id = %comment.id, "comment added");
        comments.write().push(comment);
        draft.set(String::new());
    };

    rsx! {
        section { class: "reel-comments",
            div { class: "reel-comments__header",
                h2 { class: "reel-comments__title", "Comments" }
                LikeButton {}
            }
            form { id: "comment-form", class: "reel-comments__form", onsubmit: on_submit,
                input {
                    class: "reel-comments__input",
                    r#type: "text",
                    placeholder: "Add a comment",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                }
                button { r#type: "submit", class: "reel-control",
                    Icon { name: "send".to_string(), class: "reel-icon".to_string() }
                }
            }
            div { class: "reel-comments__list",
                for comment in comments() {
                    div { key: "{comment.id}", class: "comment",
                        p { "{comment.body}" }
                        span { class: "comment__time", {comment.posted_label()} }
                    }
                }
            }
        }
    }
}

#[component]
fn LikeButton() -> Element {
    let mut liked = use_signal(|| false);

    rsx! {
        button {
            id: "like-btn",
            r#type: "button",
            class: if liked() { "like-btn liked" } else { "like-btn" },
            onclick: move |_| {
                let current = liked();
                liked.set(!current);
            },
            if liked() {
                Icon { name: "heart-filled".to_string(), class: "reel-icon".to_string() }
            } else {
                Icon { name: "heart".to_string(), class: "reel-icon".to_string() }
            }
        }
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookmarkButtonProps {
    pub bookmarked: bool,
    pub on_toggle: Callback<()>,
}

/// Bookmark toggle button; the icon follows the flag directly.
#[function_component(BookmarkButton)]
pub fn bookmark_button(props: &BookmarkButtonProps) -> Html {
    let (icon, label) = if props.bookmarked {
        ("★", "Remove from bookmarks")
    } else {
        ("☆", "Save to bookmarks")
    };

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    html! {
        <button
            class="bookmark-button"
            {onclick}
            aria-label={label}
            title={label}
        >
            {icon}
        </button>
    }
}

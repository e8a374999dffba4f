use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tagged sub-sections of a [`Comment`].
pub enum CommentSection {
    /// Reply/edit action links.
    Actions,
    /// Author name.
    Author,
    /// Author picture.
    Avatar,
    /// Container for everything right of the avatar.
    Content,
    /// Timestamp and similar details.
    Metadata,
    /// Comment body.
    Text,
}

impl CommentSection {
    /// Class token and slot name of the section.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Author => "author",
            Self::Avatar => "avatar",
            Self::Content => "content",
            Self::Metadata => "metadata",
            Self::Text => "text",
        }
    }

    fn element(self) -> &'static str {
        match self {
            Self::Author => "a",
            _ => "div",
        }
    }
}

#[component]
/// Single comment entry.
pub fn Comment(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui comment", layout_class)
            data-ui-primitive="true"
            data-ui-kind="comment"
        >
            {children()}
        </div>
    }
}

fn section_view(
    section: CommentSection,
    layout_class: Option<&'static str>,
    children: Children,
) -> View {
    let class = merge_layout_class(section.token(), layout_class);
    match section.element() {
        "a" => view! {
            <a class=class data-ui-kind="comment-section" data-ui-slot=section.token()>
                {children()}
            </a>
        }
        .into_view(),
        _ => view! {
            <div class=class data-ui-kind="comment-section" data-ui-slot=section.token()>
                {children()}
            </div>
        }
        .into_view(),
    }
}

#[component]
/// Action links row.
pub fn CommentActions(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    section_view(CommentSection::Actions, layout_class, children)
}

#[component]
/// Author link.
pub fn CommentAuthor(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    section_view(CommentSection::Author, layout_class, children)
}

#[component]
/// Author avatar image.
pub fn CommentAvatar(
    #[prop(into)] src: String,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class(CommentSection::Avatar.token(), layout_class)
            data-ui-kind="comment-section"
            data-ui-slot=CommentSection::Avatar.token()
        >
            <Image src=src alt=alt.unwrap_or_default() />
        </div>
    }
}

#[component]
/// Content column holding author, metadata, text and actions.
pub fn CommentContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    section_view(CommentSection::Content, layout_class, children)
}

#[component]
/// Metadata line.
pub fn CommentMetadata(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    section_view(CommentSection::Metadata, layout_class, children)
}

#[component]
/// Comment body text.
pub fn CommentText(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    section_view(CommentSection::Text, layout_class, children)
}

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Small glyph.
    Small,
    /// Large glyph.
    Large,
    /// Big glyph.
    Big,
    /// Huge glyph.
    Huge,
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
            Self::Big => "big",
            Self::Huge => "huge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Image sizing tokens.
pub enum ImageSize {
    /// Mini image.
    Mini,
    /// Tiny image.
    Tiny,
    /// Small image.
    Small,
    /// Medium image.
    Medium,
    /// Large image.
    Large,
}

impl ImageSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Mini => "mini",
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Option bag accepted by [`Icon`] and the icon factory.
pub struct IconProps {
    /// Icon glyph name (`"user"`, `"close"`).
    pub name: String,
    /// Optional glyph size.
    pub size: Option<IconSize>,
    /// Disabled/faded presentation.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Option bag accepted by [`Image`] and the image factory.
pub struct ImageProps {
    /// Image URL.
    pub src: String,
    /// Alternative text.
    pub alt: Option<String>,
    /// Optional size.
    pub size: Option<ImageSize>,
    /// Circular avatar presentation.
    pub avatar: bool,
}

pub(crate) fn icon_class_name(name: &str, size: Option<IconSize>, disabled: bool) -> String {
    let mut classes = Vec::new();
    if disabled {
        classes.push("disabled");
    }
    if let Some(size) = size {
        classes.push(size.token());
    }
    classes.extend(name.split_whitespace());
    classes.push("icon");
    classes.join(" ")
}

pub(crate) fn image_class_name(size: Option<ImageSize>, avatar: bool) -> String {
    let mut classes = vec!["ui"];
    if avatar {
        classes.push("avatar");
    }
    if let Some(size) = size {
        classes.push(size.token());
    }
    classes.push("image");
    classes.join(" ")
}

pub use components::{Icon, Image};

// Kept in a submodule so the props structs generated by `#[component]` do not collide with the
// public `IconProps` / `ImageProps` option bags above.
mod components {
    use super::*;

    #[component]
    /// Named glyph icon.
    pub fn Icon(
        #[prop(into)] name: String,
        #[prop(default = None)] size: Option<IconSize>,
        #[prop(optional)] disabled: bool,
        #[prop(optional)] layout_class: Option<&'static str>,
    ) -> impl IntoView {
        view! {
            <i
                class=merge_layout_class(icon_class_name(&name, size, disabled), layout_class)
                aria-hidden="true"
                data-ui-primitive="true"
                data-ui-kind="icon"
                data-ui-icon=name.clone()
            ></i>
        }
    }

    #[component]
    /// Image element with shared sizing tokens.
    pub fn Image(
        #[prop(into)] src: String,
        #[prop(optional, into)] alt: Option<String>,
        #[prop(default = None)] size: Option<ImageSize>,
        #[prop(optional)] avatar: bool,
        #[prop(optional)] layout_class: Option<&'static str>,
    ) -> impl IntoView {
        view! {
            <img
                class=merge_layout_class(image_class_name(size, avatar), layout_class)
                src=src
                alt=alt.unwrap_or_default()
                data-ui-primitive="true"
                data-ui-kind="image"
            />
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_classes_put_modifiers_before_name() {
        assert_eq!(icon_class_name("user", None, false), "user icon");
        assert_eq!(
            icon_class_name("circle  outline", Some(IconSize::Large), true),
            "disabled large circle outline icon"
        );
    }

    #[test]
    fn image_classes_reflect_avatar_and_size() {
        assert_eq!(image_class_name(None, false), "ui image");
        assert_eq!(
            image_class_name(Some(ImageSize::Tiny), true),
            "ui avatar tiny image"
        );
    }
}

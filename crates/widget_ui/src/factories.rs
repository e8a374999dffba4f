//! Shorthand element factories.
//!
//! Content props of the widget set accept a primitive value, a props bag, or a prebuilt element.
//! [`normalize_shorthand`] folds that input into either props or a passthrough element, and
//! [`create_image`] / [`create_icon`] render the result.

use leptos::*;

use crate::primitives::{Icon, IconProps, Image, ImageProps};

/// Heterogeneous element input accepted by the factories.
#[derive(Clone, Default)]
pub enum Shorthand<P> {
    /// Nothing to render.
    #[default]
    Empty,
    /// Primitive value mapped onto the kind's main prop (`src` for images, `name` for icons).
    Value(String),
    /// Full props bag.
    Props(P),
    /// Prebuilt element rendered as-is.
    Element(View),
}

impl<P> From<&str> for Shorthand<P> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl<P> From<String> for Shorthand<P> {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl<P> From<View> for Shorthand<P> {
    fn from(view: View) -> Self {
        Self::Element(view)
    }
}

impl<P> From<Option<String>> for Shorthand<P> {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Empty, Self::Value)
    }
}

impl From<ImageProps> for Shorthand<ImageProps> {
    fn from(props: ImageProps) -> Self {
        Self::Props(props)
    }
}

impl From<IconProps> for Shorthand<IconProps> {
    fn from(props: IconProps) -> Self {
        Self::Props(props)
    }
}

/// Outcome of [`normalize_shorthand`].
#[derive(Clone)]
pub enum Normalized<P> {
    /// Props to render the kind's primitive with.
    Props(P),
    /// Caller-supplied element, untouched.
    Element(View),
}

/// Props bag that can be built from a primitive shorthand value.
pub trait ShorthandProps: Default + Clone {
    /// Maps a primitive value onto the main prop.
    fn from_value(value: String) -> Self;

    /// Applies `overrides` on top of `self`. Unset override fields keep the current value.
    fn merge(self, overrides: Self) -> Self;
}

impl ShorthandProps for ImageProps {
    fn from_value(value: String) -> Self {
        Self {
            src: value,
            ..Self::default()
        }
    }

    fn merge(self, overrides: Self) -> Self {
        Self {
            src: if overrides.src.is_empty() {
                self.src
            } else {
                overrides.src
            },
            alt: overrides.alt.or(self.alt),
            size: overrides.size.or(self.size),
            avatar: self.avatar || overrides.avatar,
        }
    }
}

impl ShorthandProps for IconProps {
    fn from_value(value: String) -> Self {
        Self {
            name: value,
            ..Self::default()
        }
    }

    fn merge(self, overrides: Self) -> Self {
        Self {
            name: if overrides.name.is_empty() {
                self.name
            } else {
                overrides.name
            },
            size: overrides.size.or(self.size),
            disabled: self.disabled || overrides.disabled,
        }
    }
}

/// Folds shorthand input into props or a passthrough element.
///
/// Returns `None` for [`Shorthand::Empty`] and for an empty or whitespace-only value. Elements are
/// returned untouched and ignore `overrides`.
pub fn normalize_shorthand<P: ShorthandProps>(
    input: Shorthand<P>,
    overrides: Option<P>,
) -> Option<Normalized<P>> {
    let props = match input {
        Shorthand::Empty => return None,
        Shorthand::Element(view) => return Some(Normalized::Element(view)),
        Shorthand::Value(value) if value.trim().is_empty() => return None,
        Shorthand::Value(value) => P::from_value(value),
        Shorthand::Props(props) => props,
    };
    Some(Normalized::Props(match overrides {
        Some(overrides) => props.merge(overrides),
        None => props,
    }))
}

/// Renders image shorthand as an [`Image`].
pub fn create_image(
    input: impl Into<Shorthand<ImageProps>>,
    overrides: Option<ImageProps>,
) -> Option<View> {
    normalize_shorthand(input.into(), overrides).map(|normalized| match normalized {
        Normalized::Element(view) => view,
        Normalized::Props(props) => view! {
            <Image
                src=props.src
                alt=props.alt.unwrap_or_default()
                size=props.size
                avatar=props.avatar
            />
        }
        .into_view(),
    })
}

/// Renders icon shorthand as an [`Icon`].
pub fn create_icon(
    input: impl Into<Shorthand<IconProps>>,
    overrides: Option<IconProps>,
) -> Option<View> {
    normalize_shorthand(input.into(), overrides).map(|normalized| match normalized {
        Normalized::Element(view) => view,
        Normalized::Props(props) => {
            view! { <Icon name=props.name size=props.size disabled=props.disabled /> }.into_view()
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::primitives::{IconSize, ImageSize};

    fn props<P: ShorthandProps>(normalized: Option<Normalized<P>>) -> Option<P> {
        match normalized {
            Some(Normalized::Props(props)) => Some(props),
            _ => None,
        }
    }

    #[test]
    fn value_maps_to_main_prop_per_kind() {
        let image = props(normalize_shorthand::<ImageProps>("avatar.png".into(), None));
        assert_eq!(image.map(|image| image.src), Some("avatar.png".to_string()));

        let icon = props(normalize_shorthand::<IconProps>("close".into(), None));
        assert_eq!(icon.map(|icon| icon.name), Some("close".to_string()));
    }

    #[test]
    fn empty_input_and_blank_values_yield_nothing() {
        assert!(normalize_shorthand::<ImageProps>(Shorthand::Empty, None).is_none());
        assert!(normalize_shorthand::<ImageProps>("".into(), None).is_none());
        assert!(normalize_shorthand::<IconProps>(Shorthand::from(None::<String>), None).is_none());
    }

    #[test]
    fn overrides_merge_into_value_props() {
        let image = props(normalize_shorthand(
            Shorthand::<ImageProps>::from("joe.jpg"),
            Some(ImageProps {
                size: Some(ImageSize::Mini),
                avatar: true,
                ..ImageProps::default()
            }),
        ));
        assert_eq!(
            image,
            Some(ImageProps {
                src: "joe.jpg".to_string(),
                alt: None,
                size: Some(ImageSize::Mini),
                avatar: true,
            })
        );
    }

    #[test]
    fn props_input_keeps_fields_not_overridden() {
        let icon = props(normalize_shorthand(
            Shorthand::Props(IconProps {
                name: "user".to_string(),
                size: Some(IconSize::Small),
                disabled: false,
            }),
            Some(IconProps {
                size: Some(IconSize::Huge),
                ..IconProps::default()
            }),
        ));
        assert_eq!(
            icon,
            Some(IconProps {
                name: "user".to_string(),
                size: Some(IconSize::Huge),
                disabled: false,
            })
        );
    }
}

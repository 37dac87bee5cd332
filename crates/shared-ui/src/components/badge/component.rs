use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Positive,
    Info,
    Warning,
    Destructive,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Positive => "positive",
            BadgeVariant::Info => "info",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
        }
    }
}

/// Inline label for statuses and counts.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "badge",
            "data-style": variant.class(),
            ..attributes,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_variant_is_neutral() {
        assert_eq!(BadgeVariant::default(), BadgeVariant::Neutral);
    }

    #[test]
    fn variant_classes_are_distinct() {
        let classes = [
            BadgeVariant::Neutral.class(),
            BadgeVariant::Positive.class(),
            BadgeVariant::Info.class(),
            BadgeVariant::Warning.class(),
            BadgeVariant::Destructive.class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn renders_variant_as_data_attribute() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Info, "In Court" }
        });
        assert!(html.contains("data-style=\"info\""), "html: {html}");
        assert!(html.contains("In Court"), "html: {html}");
    }
}

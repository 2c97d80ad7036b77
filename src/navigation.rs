pub const HEADER_HEIGHT_PX: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Services,
    MachineLearning,
    Contact,
    About,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Services => "services",
            Self::MachineLearning => "machinelearning",
            Self::Contact => "contact",
            Self::About => "about",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationPlan {
    pub scroll_to: Option<f64>,
    pub close_menu: bool,
}

/// `target_top` is the section's document offset, when it exists.
pub fn plan_navigation(target_top: Option<f64>) -> NavigationPlan {
    NavigationPlan {
        scroll_to: target_top
            .filter(|top| top.is_finite())
            .map(|top| (top - HEADER_HEIGHT_PX).max(0.0)),
        close_menu: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_leaves_room_for_fixed_header() {
        let plan = plan_navigation(Some(1_480.0));
        assert_eq!(plan.scroll_to, Some(1_400.0));
        assert!(plan.close_menu);
    }

    #[test]
    fn destination_never_goes_above_page_top() {
        assert_eq!(plan_navigation(Some(30.0)).scroll_to, Some(0.0));
    }

    #[test]
    fn missing_target_still_closes_menu() {
        let plan = plan_navigation(None);
        assert_eq!(plan.scroll_to, None);
        assert!(plan.close_menu);
    }

    #[test]
    fn hrefs_are_fragment_links_to_section_ids() {
        assert_eq!(Section::MachineLearning.href(), "#machinelearning");
        assert_eq!(Section::Contact.href(), "#contact");
        assert_eq!(Section::Hero.id(), "hero");
    }
}

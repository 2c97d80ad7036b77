#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolutionTab {
    #[default]
    Predictive,
    Automation,
    Analytics,
}

impl SolutionTab {
    pub const ALL: [Self; 3] = [Self::Predictive, Self::Automation, Self::Analytics];

    pub fn id(self) -> &'static str {
        match self {
            Self::Predictive => "predictive",
            Self::Automation => "automation",
            Self::Analytics => "analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Predictive => "Predictive Analytics",
            Self::Automation => "Automation",
            Self::Analytics => "Advanced Analytics",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Predictive => "M21.21 15.89A10 10 0 118 2.83M22 12A10 10 0 0012 2v10z",
            Self::Automation => "M14.5 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V7.5L14.5 2zM14 2v6h6",
            Self::Analytics => "M18 20L18 10M12 20L12 4M6 20L6 14",
        }
    }
}

/// Every panel's tab paired with whether it is shown for `active`.
pub fn panel_states(active: SolutionTab) -> [(SolutionTab, bool); 3] {
    SolutionTab::ALL.map(|tab| (tab, tab == active))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictive_is_selected_initially() {
        assert_eq!(SolutionTab::default(), SolutionTab::Predictive);
    }

    #[test]
    fn selecting_automation_marks_exactly_its_panel_active() {
        let active_panels = panel_states(SolutionTab::Automation)
            .into_iter()
            .filter(|(_, is_active)| *is_active)
            .map(|(tab, _)| tab.id())
            .collect::<Vec<_>>();
        assert_eq!(active_panels, vec!["automation"]);
    }

    #[test]
    fn every_selection_has_one_active_panel() {
        for tab in SolutionTab::ALL {
            let count = panel_states(tab).iter().filter(|(_, active)| *active).count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn panels_follow_tab_order_with_distinct_ids() {
        let ids = panel_states(SolutionTab::default()).map(|(tab, _)| tab.id());
        assert_eq!(ids, ["predictive", "automation", "analytics"]);
    }
}

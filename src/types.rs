//! Common types and data structures

use crate::constants::*;

/// One row of the enhance panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnhanceOption {
    GoogleSearch,
    QuivrSecondBrain,
}

impl EnhanceOption {
    /// Rows in display order
    pub const ALL: [EnhanceOption; 2] = [EnhanceOption::GoogleSearch, EnhanceOption::QuivrSecondBrain];

    pub fn label(self) -> &'static str {
        match self {
            EnhanceOption::GoogleSearch => GOOGLE_SEARCH_LABEL,
            EnhanceOption::QuivrSecondBrain => QUIVR_SECOND_BRAIN_LABEL,
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            EnhanceOption::GoogleSearch => GOOGLE_SEARCH_TOOLTIP,
            EnhanceOption::QuivrSecondBrain => QUIVR_SECOND_BRAIN_TOOLTIP,
        }
    }

    /// Label reported to screen readers for the row's switch.
    ///
    /// Both rows announce "google search"; the shipped product does the same and
    /// the correct wording for the second row has not been decided.
    pub fn accessibility_label(self) -> &'static str {
        SWITCH_ACCESSIBILITY_LABEL
    }

    pub(crate) fn id_salt(self) -> &'static str {
        match self {
            EnhanceOption::GoogleSearch => "enhance_google_search",
            EnhanceOption::QuivrSecondBrain => "enhance_quivr_second_brain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_in_display_order() {
        assert_eq!(EnhanceOption::ALL[0].label(), "Enable google search");
        assert_eq!(EnhanceOption::ALL[1].label(), "Enable Quivr Second Brain");
    }

    #[test]
    fn google_search_tooltip_mentions_latency() {
        let tip = EnhanceOption::GoogleSearch.tooltip();
        assert!(tip.contains("latest information and online events"));
        assert!(tip.contains("latency"));
    }

    #[test]
    fn second_brain_tooltip_is_placeholder() {
        assert_eq!(EnhanceOption::QuivrSecondBrain.tooltip(), "need content");
    }

    #[test]
    fn both_switches_share_accessibility_label() {
        for option in EnhanceOption::ALL {
            assert_eq!(option.accessibility_label(), "google search");
        }
    }

    #[test]
    fn id_salts_are_distinct() {
        assert_ne!(
            EnhanceOption::GoogleSearch.id_salt(),
            EnhanceOption::QuivrSecondBrain.id_salt()
        );
    }
}

use crate::model::{CanvasItem, CanvasType};
use uuid::Uuid;

const BMC_SECTIONS: &[&str] = &[
    "bmc_keyPartners",
    "bmc_keyActivities",
    "bmc_valuePropositions",
    "bmc_customerRelationships",
    "bmc_customerSegments",
    "bmc_keyResources",
    "bmc_channels",
    "bmc_costStructure",
    "bmc_revenueStreams",
];

const PEST_SECTIONS: &[&str] = &[
    "pest_political",
    "pest_economic",
    "pest_social",
    "pest_technological",
];

const SWOT_SECTIONS: &[&str] = &[
    "swot_strengths",
    "swot_weaknesses",
    "swot_opportunities",
    "swot_threats",
];

const STP_SECTIONS: &[&str] = &["stp_segmentation", "stp_targeting", "stp_positioning"];

/// Ordered title keys of a canvas type. Placeholder and guide keys derive from them.
pub fn section_keys(canvas_type: CanvasType) -> &'static [&'static str] {
    match canvas_type {
        CanvasType::Bmc => BMC_SECTIONS,
        CanvasType::Pest => PEST_SECTIONS,
        CanvasType::Swot => SWOT_SECTIONS,
        CanvasType::Stp => STP_SECTIONS,
    }
}

/// Fresh item set for a new canvas: new ids, empty content, template order.
pub fn instantiate(canvas_type: CanvasType) -> Vec<CanvasItem> {
    section_keys(canvas_type)
        .iter()
        .map(|title_key| CanvasItem {
            id: Uuid::new_v4().to_string(),
            title_key: (*title_key).to_string(),
            placeholder_key: format!("{title_key}_placeholder"),
            guide_key: format!("{title_key}_guide"),
            content: String::new(),
        })
        .collect()
}

pub type BoardLayout = &'static [&'static [&'static [usize]]];

const BMC_LAYOUT: BoardLayout = &[&[&[0], &[1, 5], &[2], &[3, 6], &[4]], &[&[7], &[8]]];
const QUADRANT_LAYOUT: BoardLayout = &[&[&[0], &[1]], &[&[2], &[3]]];
const STP_LAYOUT: BoardLayout = &[&[&[0], &[1], &[2]]];

/// Board layout as rows of columns; each column stacks item indexes top to bottom.
pub fn board_layout(canvas_type: CanvasType) -> BoardLayout {
    match canvas_type {
        CanvasType::Bmc => BMC_LAYOUT,
        CanvasType::Pest | CanvasType::Swot => QUADRANT_LAYOUT,
        CanvasType::Stp => STP_LAYOUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{board_layout, instantiate, section_keys};
    use crate::model::CanvasType;
    use std::collections::BTreeSet;

    #[test]
    fn instantiate_produces_expected_counts() {
        assert_eq!(instantiate(CanvasType::Bmc).len(), 9);
        assert_eq!(instantiate(CanvasType::Pest).len(), 4);
        assert_eq!(instantiate(CanvasType::Swot).len(), 4);
        assert_eq!(instantiate(CanvasType::Stp).len(), 3);
    }

    #[test]
    fn instantiate_keeps_template_order_and_empty_content() {
        let items = instantiate(CanvasType::Bmc);
        assert_eq!(items[0].title_key, "bmc_keyPartners");
        assert_eq!(items[0].placeholder_key, "bmc_keyPartners_placeholder");
        assert_eq!(items[0].guide_key, "bmc_keyPartners_guide");
        assert_eq!(items[8].title_key, "bmc_revenueStreams");
        assert!(items.iter().all(|item| item.content.is_empty()));
    }

    #[test]
    fn every_call_generates_fresh_identities() {
        let first = instantiate(CanvasType::Swot);
        let second = instantiate(CanvasType::Swot);
        let ids: BTreeSet<_> = first
            .iter()
            .chain(second.iter())
            .map(|item| item.id.clone())
            .collect();
        assert_eq!(ids.len(), first.len() + second.len());
    }

    #[test]
    fn board_layout_places_every_item_exactly_once() {
        for canvas_type in CanvasType::ALL {
            let mut placed: Vec<usize> = board_layout(canvas_type)
                .iter()
                .flat_map(|row| row.iter())
                .flat_map(|column| column.iter().copied())
                .collect();
            placed.sort_unstable();
            let expected: Vec<usize> = (0..section_keys(canvas_type).len()).collect();
            assert_eq!(placed, expected, "layout mismatch for {canvas_type}");
        }
    }
}

pub mod ar_viewer;
pub mod artisans;
pub mod footer;
pub mod hero;
pub mod monument_section;
pub mod quiz_card;
pub mod rewards_panel;
pub mod souvenir_studio;

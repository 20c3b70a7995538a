pub mod advisor_panel;
pub mod kpi_card;
pub mod queue_bar;
pub mod recipe_card;
pub mod shopping_list;
pub mod toast;

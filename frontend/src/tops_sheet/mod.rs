pub mod top_sheet;

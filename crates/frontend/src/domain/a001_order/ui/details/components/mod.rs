mod invoice_button;
mod items_table;
mod order_info;
mod status_select;
mod totals;

pub use invoice_button::InvoiceButton;
pub use items_table::ItemsTable;
pub use order_info::OrderInfo;
pub use status_select::StatusSelect;
pub use totals::TotalsCard;

//! PDF invoice for a single order.
//!
//! Plain text layout in the standard Helvetica font: company header, order
//! block, one row per line item and the totals block. Rows that do not fit
//! continue on the next page.

use contracts::domain::a001_order::aggregate::{invoice_file_name, Order};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::shared::config::InvoiceConfig;
use crate::shared::format::format_amount;

// A4 in points
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;
const LINE_HEIGHT: i64 = 16;
const ROWS_FIRST_PAGE: usize = 30;
const ROWS_NEXT_PAGE: usize = 42;

const COL_ITEM: i64 = MARGIN;
const COL_QTY: i64 = 330;
const COL_PRICE: i64 = 400;
const COL_AMOUNT: i64 = 480;

/// Text operations of one page, positioned top-down.
struct PageWriter {
    operations: Vec<Operation>,
    y: i64,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn text(&mut self, x: i64, size: i64, bold: bool, text: &str) {
        let font = if bold { "F2" } else { "F1" };
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), size.into()]),
            Operation::new("Td", vec![x.into(), self.y.into()]),
            Operation::new("Tj", vec![Object::string_literal(to_win_ansi(text))]),
            Operation::new("ET", vec![]),
        ]);
    }

    fn line(&mut self, x: i64, size: i64, bold: bool, text: &str) {
        self.text(x, size, bold, text);
        self.next_line();
    }

    fn next_line(&mut self) {
        self.y -= LINE_HEIGHT;
    }

    fn rule(&mut self) {
        let y = self.y + LINE_HEIGHT / 2;
        self.operations.extend([
            Operation::new("m", vec![MARGIN.into(), y.into()]),
            Operation::new("l", vec![(PAGE_WIDTH - MARGIN).into(), y.into()]),
            Operation::new("S", vec![]),
        ]);
        self.next_line();
    }

    fn item_header(&mut self) {
        self.text(COL_ITEM, 10, true, "Item");
        self.text(COL_QTY, 10, true, "Qty");
        self.text(COL_PRICE, 10, true, "Price");
        self.text(COL_AMOUNT, 10, true, "Amount");
        self.next_line();
        self.rule();
    }
}

/// Code points of WinAnsi bytes 0x80..=0x9F; the five unassigned slots are absent.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20AC}', 0x80),
    ('\u{201A}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201E}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8A),
    ('\u{2039}', 0x8B),
    ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9A),
    ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C),
    ('\u{017E}', 0x9E),
    ('\u{0178}', 0x9F),
];

/// Encodes text for the standard Type1 fonts, which use WinAnsiEncoding.
/// Characters the encoding lacks become `?`.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0..=0x7F | 0xA0..=0xFF => c as u8,
            _ => WIN_ANSI_HIGH
                .iter()
                .find(|(ch, _)| *ch == c)
                .map_or(b'?', |(_, byte)| *byte),
        })
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}

fn money(currency: &str, value: f64) -> String {
    format!("{} {}", currency, format_amount(value))
}

fn write_header(page: &mut PageWriter, order: &Order, company: &InvoiceConfig) {
    page.line(MARGIN, 18, true, &company.company_name);
    if !company.company_address.is_empty() {
        page.line(MARGIN, 10, false, &company.company_address);
    }
    page.next_line();

    page.line(
        MARGIN,
        14,
        true,
        &invoice_file_name(&order.to_string_id()),
    );
    page.line(MARGIN, 10, false, &format!("Order: {}", order.code));
    page.line(
        MARGIN,
        10,
        false,
        &format!("Date: {}", order.metadata.created_at.format("%Y-%m-%d")),
    );
    page.line(MARGIN, 10, false, &format!("Status: {}", order.status));
    if !order.payment_method.is_empty() {
        page.line(
            MARGIN,
            10,
            false,
            &format!("Payment: {}", order.payment_method),
        );
    }
    page.next_line();

    page.line(MARGIN, 10, true, "Bill to");
    page.line(MARGIN, 10, false, &order.customer.name);
    if !order.customer.email.is_empty() {
        page.line(MARGIN, 10, false, &order.customer.email);
    }
    let address = order.shipping_address.one_line();
    if !address.is_empty() {
        page.line(MARGIN, 10, false, &address);
    }
    page.next_line();
}

fn write_totals(page: &mut PageWriter, order: &Order) {
    page.rule();
    for (label, value) in [
        ("Subtotal", order.sub_total),
        ("Shipping", order.shipping),
        ("Total", order.total),
    ] {
        let bold = label == "Total";
        page.text(COL_PRICE, 10, bold, label);
        page.text(COL_AMOUNT, 10, bold, &money(&order.currency, value));
        page.next_line();
    }
}

/// Splits the items into pages; the first page has room for fewer rows.
fn paginate(count: usize) -> Vec<std::ops::Range<usize>> {
    let mut pages = vec![0..count.min(ROWS_FIRST_PAGE)];
    let mut start = pages[0].end;
    while start < count {
        let end = (start + ROWS_NEXT_PAGE).min(count);
        pages.push(start..end);
        start = end;
    }
    pages
}

fn layout_pages(order: &Order, company: &InvoiceConfig) -> Vec<PageWriter> {
    let ranges = paginate(order.items.len());
    let last = ranges.len() - 1;
    let mut pages = Vec::with_capacity(ranges.len());

    for (index, range) in ranges.into_iter().enumerate() {
        let mut page = PageWriter::new();
        if index == 0 {
            write_header(&mut page, order, company);
        }
        page.item_header();
        for item in &order.items[range] {
            page.text(COL_ITEM, 10, false, &truncate(&item.name, 45));
            page.text(COL_QTY, 10, false, &item.quantity.to_string());
            page.text(COL_PRICE, 10, false, &format_amount(item.price));
            page.text(COL_AMOUNT, 10, false, &format_amount(item.amount()));
            page.next_line();
        }
        if index == last {
            write_totals(&mut page, order);
        }
        pages.push(page);
    }
    pages
}

fn font(doc: &mut Document, base_font: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

/// Рендер счёта в PDF
pub fn render_invoice(order: &Order, company: &InvoiceConfig) -> anyhow::Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular = font(&mut doc, "Helvetica");
    let bold = font(&mut doc, "Helvetica-Bold");
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular,
            "F2" => bold,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in layout_pages(order, company) {
        let content = Content {
            operations: page.operations,
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::aggregate::{LineItem, OrderDto};

    fn order_with_items(n: usize) -> Order {
        let items: Vec<LineItem> = (0..n)
            .map(|i| LineItem {
                name: format!("Item {}", i),
                sku: format!("SKU-{}", i),
                image_url: None,
                quantity: 1,
                price: 10.0,
            })
            .collect();
        let sub_total = 10.0 * n as f64;
        OrderDto {
            code: Some("ORD-PDF".into()),
            currency: "USD".into(),
            items,
            sub_total,
            shipping: 5.0,
            total: sub_total + 5.0,
            ..Default::default()
        }
        .into_order()
    }

    #[test]
    fn paginate_splits_after_first_page() {
        assert_eq!(paginate(0), vec![0..0]);
        assert_eq!(paginate(30), vec![0..30]);
        assert_eq!(paginate(31), vec![0..30, 30..31]);
        assert_eq!(paginate(100), vec![0..30, 30..72, 72..100]);
    }

    #[test]
    fn renders_single_page_pdf() {
        let bytes = render_invoice(&order_with_items(2), &InvoiceConfig::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn long_orders_continue_on_next_pages() {
        let bytes = render_invoice(&order_with_items(75), &InvoiceConfig::default()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn text_is_encoded_as_win_ansi() {
        assert_eq!(to_win_ansi("Café ☕"), b"Caf\xe9 ?".to_vec());
        assert_eq!(
            to_win_ansi("\u{20AC}5 \u{2013} \u{201C}ok\u{201D}\u{2122}"),
            b"\x805 \x96 \x93ok\x94\x99".to_vec()
        );
        // C1 controls have no glyph in WinAnsi
        assert_eq!(to_win_ansi("\u{0080}\u{009F}"), b"??".to_vec());
        assert_eq!(to_win_ansi("Заказ"), b"?????".to_vec());
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}

//! Receipt rendering
//!
//! A receipt is first laid out as positioned text lines on a US-Letter page
//! and then written out as a PDF with the standard Helvetica fonts.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::config::AcademyConfig;
use crate::models::{StudentStatement, TeacherStatement};
use crate::utils::errors::Result;
use crate::utils::helpers::format_money;

/// US-Letter width in inches
pub const PAGE_WIDTH_IN: f64 = 8.5;
/// US-Letter height in inches
pub const PAGE_HEIGHT_IN: f64 = 11.0;
/// History lines stop once the cursor falls below this height
pub const BOTTOM_MARGIN_IN: f64 = 1.0;

const LEFT_MARGIN_IN: f64 = 1.0;
const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// One run of text; `y_in` is measured up from the bottom edge
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub style: FontStyle,
    pub size: f64,
    pub x_in: f64,
    pub y_in: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLayout {
    pub title: String,
    pub lines: Vec<TextLine>,
}

impl ReceiptLayout {
    /// History entries that made it onto the page
    pub fn history_lines(&self) -> impl Iterator<Item = &TextLine> {
        self.lines.iter().filter(|l| l.style == FontStyle::Regular)
    }
}

/// Cursor writing lines down the page from the top
struct PageCursor {
    lines: Vec<TextLine>,
    y_in: f64,
}

impl PageCursor {
    fn new() -> Self {
        Self { lines: Vec::new(), y_in: PAGE_HEIGHT_IN }
    }

    fn at(&mut self, from_top_in: f64) -> &mut Self {
        self.y_in = PAGE_HEIGHT_IN - from_top_in;
        self
    }

    fn down(&mut self, by_in: f64) -> &mut Self {
        self.y_in -= by_in;
        self
    }

    fn write(&mut self, text: impl Into<String>, style: FontStyle, size: f64) -> &mut Self {
        self.lines.push(TextLine {
            text: text.into(),
            style,
            size,
            x_in: LEFT_MARGIN_IN,
            y_in: self.y_in,
        });
        self
    }

    /// Write history entries 0.25in apart until the bottom margin is reached
    fn write_history(&mut self, entries: impl IntoIterator<Item = String>) {
        for entry in entries {
            self.write(entry, FontStyle::Regular, 10.0);
            self.down(0.25);
            if self.y_in < BOTTOM_MARGIN_IN {
                break;
            }
        }
    }
}

#[derive(Clone)]
pub struct ReceiptService {
    academy: AcademyConfig,
}

impl ReceiptService {
    pub fn new(academy: AcademyConfig) -> Self {
        Self { academy }
    }

    /// Fee receipt for a student
    pub fn student_receipt(&self, statement: &StudentStatement) -> ReceiptLayout {
        let currency = &self.academy.currency;
        let student = &statement.student;

        let mut cursor = self.header("Student Fee Receipt");
        cursor
            .at(2.2)
            .write(format!("Student Name: {}", student.name), FontStyle::Bold, 12.0)
            .down(0.3)
            .write(format!("Class: {}", student.class_name), FontStyle::Bold, 12.0)
            .down(0.3)
            .write(format!("Monthly Fee: {}", format_money(currency, student.monthly_fee)), FontStyle::Bold, 12.0)
            .down(0.3)
            .write(format!("Total Paid: {}", format_money(currency, statement.total_paid)), FontStyle::Bold, 12.0)
            .down(0.6)
            .write("Payment History:", FontStyle::Bold, 14.0)
            .down(0.4);

        cursor.write_history(statement.payments.iter().map(|p| {
            format!(
                "{} - {} - {} - {}",
                p.payment_date,
                format_money(currency, p.amount),
                p.payment_method,
                p.month_year
            )
        }));

        ReceiptLayout {
            title: format!("Fee receipt - {}", student.name),
            lines: cursor.lines,
        }
    }

    /// Salary receipt for a teacher
    pub fn teacher_receipt(&self, statement: &TeacherStatement) -> ReceiptLayout {
        let currency = &self.academy.currency;
        let teacher = &statement.teacher;

        let mut cursor = self.header("Teacher Salary Receipt");
        cursor
            .at(2.2)
            .write(format!("Teacher Name: {}", teacher.name), FontStyle::Bold, 12.0)
            .down(0.3)
            .write(format!("Monthly Salary: {}", format_money(currency, teacher.monthly_salary)), FontStyle::Bold, 12.0)
            .down(0.3)
            .write(format!("Total Paid: {}", format_money(currency, statement.total_paid)), FontStyle::Bold, 12.0)
            .down(0.6)
            .write("Payment History:", FontStyle::Bold, 14.0)
            .down(0.4);

        cursor.write_history(statement.payments.iter().map(|p| {
            format!("{} - {} - {}", p.payment_date, format_money(currency, p.amount), p.month_year)
        }));

        ReceiptLayout {
            title: format!("Salary receipt - {}", teacher.name),
            lines: cursor.lines,
        }
    }

    /// Write a layout out as a single-page PDF
    pub fn render(&self, layout: &ReceiptLayout) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            layout.title.as_str(),
            to_mm(PAGE_WIDTH_IN),
            to_mm(PAGE_HEIGHT_IN),
            "Receipt",
        );
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let canvas = doc.get_page(page).get_layer(layer);

        for line in &layout.lines {
            let font: &IndirectFontRef = match line.style {
                FontStyle::Regular => &regular,
                FontStyle::Bold => &bold,
            };
            canvas.use_text(line.text.as_str(), line.size as _, to_mm(line.x_in), to_mm(line.y_in), font);
        }

        let mut writer = BufWriter::new(Vec::new());
        doc.save(&mut writer)?;
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(bytes)
    }

    fn header(&self, subtitle: &str) -> PageCursor {
        let mut cursor = PageCursor::new();
        cursor
            .at(1.0)
            .write(self.academy.name.as_str(), FontStyle::Bold, 24.0)
            .at(1.5)
            .write(subtitle, FontStyle::Bold, 18.0);
        cursor
    }
}

fn to_mm(inches: f64) -> Mm {
    Mm((inches * MM_PER_INCH) as _)
}

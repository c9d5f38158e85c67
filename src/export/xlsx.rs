use crate::errors::{AppError, AppResult};
use crate::export::model::{bookings_to_table, get_headers};
use crate::export::notify_export_success;
use crate::models::booking::BookingRecord;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Columns written as numbers (seat_number, Column, Row). Phone numbers
/// stay text so leading zeros survive.
const NUMERIC_COLUMNS: [usize; 3] = [5, 6, 7];

/// One styled sheet named `Bookings`, columns sized to their content.
pub(crate) fn export_xlsx(bookings: &[BookingRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Bookings").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Righe
    // ---------------------------
    for (row_index, values) in bookings_to_table(bookings).iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            let base = Format::new()
                .set_background_color(band_color)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin);

            match value.parse::<f64>() {
                Ok(num) if NUMERIC_COLUMNS.contains(&col) => {
                    let fmt = base.set_align(FormatAlign::Right);
                    worksheet
                        .write_with_format(row, col as u16, num, &fmt)
                        .map_err(to_export_error)?;
                }
                _ => {
                    worksheet
                        .write_with_format(row, col as u16, value.as_str(), &base)
                        .map_err(to_export_error)?;
                }
            }

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

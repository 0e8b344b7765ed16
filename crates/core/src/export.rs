//! Client-side PDF and spreadsheet rendering of the user list.
//!
//! Both renderers take an already-fetched, unpaginated row set and produce
//! the file bytes in memory; no network traffic happens here. A caller
//! whose fetch-all failed must not call in with a partial set.

use printpdf::{BuiltinFont, Mm, PdfDocument, PdfLayerReference};
use rust_xlsxwriter::{Format, Workbook};
use thiserror::Error;

use crate::user::User;

/// Timestamp format shared by the on-screen table and both exports.
pub const LAST_LOGIN_FORMAT: &str = "%d/%m/%Y %H:%M";
pub const NO_SESSION: &str = "No Session";
pub const NO_DEVICE: &str = "No Device";

/// The five logical columns every export carries, in order.
pub const EXPORT_HEADERS: [&str; 5] = [
    "First Name",
    "Last Name",
    "Email",
    "Last Login Time",
    "Last Device Used",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render PDF: {0}")]
    Pdf(#[from] printpdf::Error),
    #[error("failed to render spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// One row of the export, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub last_login: String,
    pub last_device: String,
}

impl ExportRow {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            last_login: user.last_active_time().map_or_else(
                || NO_SESSION.to_string(),
                |t| t.format(LAST_LOGIN_FORMAT).to_string(),
            ),
            last_device: user
                .last_device()
                .map_or_else(|| NO_DEVICE.to_string(), str::to_string),
        }
    }

    fn columns(&self) -> [&str; 5] {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.last_login,
            &self.last_device,
        ]
    }
}

/// Shapes a fetched row set into export rows, preserving order and count.
#[must_use]
pub fn rows(users: &[User]) -> Vec<ExportRow> {
    users.iter().map(ExportRow::from_user).collect()
}

const ROWS_PER_PDF_PAGE: usize = 40;

/// Renders the rows as an A4 PDF table titled "User List", with a bold
/// header row repeated on every page.
pub fn to_pdf(export_rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let column_x = [14.0, 50.0, 86.0, 122.0, 172.0];
    let top_y = 270.0;
    let row_step = 6.0;

    let (doc, first_page, first_layer) = PdfDocument::new("User List", Mm(210.0), Mm(297.0), "table");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let write_header = |layer: &PdfLayerReference| {
        for (x, title) in column_x.iter().zip(EXPORT_HEADERS) {
            layer.use_text(title, 10.0, Mm(*x), Mm(top_y), &bold);
        }
    };

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    layer.use_text("User List", 14.0, Mm(14.0), Mm(283.0), &bold);
    write_header(&layer);

    let mut y = top_y;
    for (i, row) in export_rows.iter().enumerate() {
        if i > 0 && i % ROWS_PER_PDF_PAGE == 0 {
            let (page, page_layer) = doc.add_page(Mm(210.0), Mm(297.0), "table");
            layer = doc.get_page(page).get_layer(page_layer);
            write_header(&layer);
            y = top_y;
        }
        y -= row_step;
        for (x, value) in column_x.iter().zip(row.columns()) {
            layer.use_text(value, 9.0, Mm(*x), Mm(y), &font);
        }
    }

    Ok(doc.save_to_bytes()?)
}

/// Renders the rows as an XLSX workbook: one "Users" sheet, a bold header
/// row and sized columns.
pub fn to_xlsx(export_rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let column_widths = [20.0, 20.0, 30.0, 25.0, 20.0];

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Users")?;

    for (col, (title, width)) in EXPORT_HEADERS.iter().zip(column_widths).enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, width)?;
        sheet.write_string_with_format(0, col, *title, &bold)?;
    }
    for (i, row) in export_rows.iter().enumerate() {
        let row_num = (i + 1) as u32;
        for (col, value) in row.columns().iter().enumerate() {
            sheet.write_string(row_num, col as u16, *value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{Device, Session};
    use chrono::{TimeZone, Utc};

    fn user_with_session() -> User {
        User {
            id: "u1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: None,
            sessions: vec![Session {
                start_time: Utc.with_ymd_and_hms(2024, 3, 4, 9, 5, 0).unwrap(),
            }],
            devices: vec![Device {
                name: "Pixel 8".into(),
            }],
            created_at: None,
        }
    }

    fn user_without_session() -> User {
        User {
            id: "u2".into(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            password: None,
            sessions: vec![],
            devices: vec![],
            created_at: None,
        }
    }

    #[test]
    fn test_row_formats_last_login() {
        let row = ExportRow::from_user(&user_with_session());
        assert_eq!(row.last_login, "04/03/2024 09:05");
        assert_eq!(row.last_device, "Pixel 8");
    }

    #[test]
    fn test_row_placeholders_without_session_or_device() {
        let row = ExportRow::from_user(&user_without_session());
        assert_eq!(row.last_login, NO_SESSION);
        assert_eq!(row.last_device, NO_DEVICE);
    }

    #[test]
    fn test_rows_preserve_count_and_order() {
        let users = vec![user_with_session(), user_without_session()];
        let export_rows = rows(&users);
        assert_eq!(export_rows.len(), 2);
        assert_eq!(export_rows[0].first_name, "Ada");
        assert_eq!(export_rows[1].first_name, "Grace");
    }

    #[test]
    fn test_pdf_bytes_have_magic_header() {
        let export_rows = rows(&[user_with_session(), user_without_session()]);
        let bytes = to_pdf(&export_rows).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_pdf_renders_multi_page_sets() {
        let users: Vec<User> = (0..95)
            .map(|i| {
                let mut u = user_without_session();
                u.id = format!("u{i}");
                u
            })
            .collect();
        let bytes = to_pdf(&rows(&users)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_xlsx_bytes_are_a_zip_container() {
        let export_rows = rows(&[user_with_session()]);
        let bytes = to_xlsx(&export_rows).unwrap();
        // XLSX is a ZIP archive
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_empty_row_set_still_renders_headers() {
        assert!(to_pdf(&[]).unwrap().starts_with(b"%PDF"));
        assert!(to_xlsx(&[]).unwrap().starts_with(b"PK"));
    }
}

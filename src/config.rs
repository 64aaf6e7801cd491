//! UI Configuration
//!
//! Page size and display labels. Defaults are the Vietnamese labels of the
//! inventory screen; any field may be overridden from a serialized config.

use serde::{Deserialize, Serialize};

/// Rows per page
pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub page_size: usize,
    pub labels: Labels,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            labels: Labels::default(),
        }
    }
}

impl UiConfig {
    /// Page size, never zero
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

/// Display strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub name_placeholder: String,
    pub price_placeholder: String,
    pub add_button: String,
    pub update_button: String,
    pub search_placeholder: String,
    pub list_heading: String,
    pub delete_button: String,
    pub edit_button: String,
    pub previous: String,
    pub next: String,
    pub page_prefix: String,
    pub currency: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Quản lý hàng hoá".to_string(),
            name_placeholder: "Nhập tên hàng hoá".to_string(),
            price_placeholder: "Nhập giá hàng hoá".to_string(),
            add_button: "Thêm hàng hoá".to_string(),
            update_button: "Cập nhật hàng hoá".to_string(),
            search_placeholder: "Tìm kiếm hàng hoá".to_string(),
            list_heading: "Danh sách hàng hoá:".to_string(),
            delete_button: "Xoá".to_string(),
            edit_button: "Chỉnh sửa".to_string(),
            previous: "Trước".to_string(),
            next: "Tiếp".to_string(),
            page_prefix: "Trang".to_string(),
            currency: "VND".to_string(),
        }
    }
}

// file: src/models/document.rs
// description: list response envelope written for one converted input file
// reference: NocoDB paginated list API response shape

use super::record::Record;
use crate::config::RecordConfig;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub list: Vec<Record>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    pub stats: QueryStats,
}

/// Always describes a single page holding every record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_rows: usize,
    pub page: u32,
    pub page_size: u32,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryStats {
    pub db_query_time: String,
}

impl Document {
    pub fn new(list: Vec<Record>, settings: &RecordConfig) -> Self {
        let page_info = PageInfo {
            total_rows: list.len(),
            page: 1,
            page_size: settings.page_size,
            is_first_page: true,
            is_last_page: true,
        };

        Self {
            list,
            page_info,
            stats: QueryStats {
                db_query_time: settings.db_query_time.clone(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

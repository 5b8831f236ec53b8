use serde_json::{json, Value};

use crate::api::format::SearchResponse;
use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Render one page of search results as aligned text rows
pub fn format_search_table(response: &SearchResponse) -> String {
    let mut out = String::new();
    if response.data.is_empty() {
        out.push_str("No products found\n");
    } else {
        out.push_str(&format!("{:>10}  {:>8}  {}\n", "PRODUCT", "TYPE", "TITLE"));
        for product in &response.data {
            out.push_str(&format!(
                "{:>10}  {:>8}  {}\n",
                product.product_id, product.product_type_id, product.title
            ));
        }
    }

    let p = &response.pagination;
    out.push_str(&format!(
        "page {}/{} ({} total, {} binary search steps)\n",
        p.current_page, p.last_page, p.total, response.binary_search_steps_subcategory
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search, PageRequest};
    use crate::testing::sample_snapshot;

    #[test]
    fn table_lists_products_and_page_footer() {
        let outcome = search(&sample_snapshot(), "shi", PageRequest::new(1, 20).unwrap());
        let text = format_search_table(&SearchResponse::from(outcome));
        assert!(text.contains("Linen Shirt"));
        assert!(text.contains("oxford shirt"));
        assert!(text.ends_with("page 1/1 (2 total, 3 binary search steps)\n"));
    }

    #[test]
    fn table_reports_empty_results() {
        let outcome = search(&sample_snapshot(), "zzz", PageRequest::new(1, 20).unwrap());
        let text = format_search_table(&SearchResponse::from(outcome));
        assert!(text.starts_with("No products found"));
        assert!(text.contains("page 1/0 (0 total"));
    }
}

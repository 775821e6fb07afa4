use serde::{Deserialize, Serialize};

use crate::backend::{BackendError, BackendResult, decode_rows};
use crate::client::BackendClient;

pub const PORTFOLIO_TABLE: &str = "portfolio_items";

pub type PortfolioItemId = String;

// structs and types

// read-only display record for a design sample
//
// the column names on the table are camelCase, so we keep them that way on the wire
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    pub title: String,
    pub designer: String,
    pub category: String,
    pub image_url: String,
    #[serde(default)]
    pub is_liked: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl PortfolioItem {
    pub fn shares_category_with(&self, other: &PortfolioItem) -> bool {
        self.category == other.category
    }

    // whole prices drop the cents, anything else shows them
    pub fn display_price(&self) -> Option<String> {
        self.price.map(|price| {
            if price.fract() == 0.0 {
                format!("${price:.0}")
            } else {
                format!("${price:.2}")
            }
        })
    }
}

// operations

pub async fn list_portfolio_items<C: BackendClient + ?Sized>(
    client: &C,
) -> BackendResult<Vec<PortfolioItem>> {
    let op = "portfolio listing";

    let rows = client
        .select(PORTFOLIO_TABLE, None)
        .await
        .map_err(|err| BackendError::from_client(op, err))?;

    decode_rows(op, rows)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::mock::MockClient;

    #[test]
    fn rows_decode_from_camel_case() {
        let client = MockClient::default();
        client.seed(
            PORTFOLIO_TABLE,
            vec![json!({
                "id": "id1",
                "title": "Minimal Mark",
                "designer": "Sarah Chen",
                "category": "Logo Design",
                "imageUrl": "https://images.unsplash.com/photo-1.jpg",
                "isLiked": true,
                "price": 299.0,
            })],
        );

        let items = block_on(list_portfolio_items(&client)).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].image_url, "https://images.unsplash.com/photo-1.jpg");
        assert_eq!(items[0].is_liked, Some(true));
        assert_eq!(items[0].tags, None);
        assert_eq!(items[0].display_price().as_deref(), Some("$299"));
    }

    #[test]
    fn prices_keep_their_cents() {
        let mut item: PortfolioItem = serde_json::from_value(json!({
            "id": "id1",
            "title": "Minimal Mark",
            "designer": "Sarah Chen",
            "category": "Logo Design",
            "imageUrl": "",
        }))
        .unwrap();
        assert_eq!(item.display_price(), None);

        item.price = Some(49.99);
        assert_eq!(item.display_price().as_deref(), Some("$49.99"));

        item.price = Some(49.5);
        assert_eq!(item.display_price().as_deref(), Some("$49.50"));

        item.price = Some(50.0);
        assert_eq!(item.display_price().as_deref(), Some("$50"));
    }

    #[test]
    fn malformed_rows_are_local_failures() {
        let client = MockClient::default();
        client.seed(PORTFOLIO_TABLE, vec![json!({"id": "id1"})]);

        let err = block_on(list_portfolio_items(&client)).unwrap_err();

        assert_eq!(err.message, "Network error during portfolio listing");
    }
}

use std::sync::Arc;

use super::error::{CatalogError, CatalogResult};
use crate::external::{RequestOptions, Transport};
use crate::models::{PageRequest, Paged, Recommendation};

/// 推荐服务
#[derive(Clone)]
pub struct RecommendationService {
    transport: Arc<dyn Transport>,
}

impl RecommendationService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// 向其他用户推荐一部番剧
    pub async fn send(&self, receiver_id: i64, anime_id: i64) -> CatalogResult<()> {
        let path = format!("/recommendations/{}/{}", receiver_id, anime_id);
        self.transport
            .post(&path, RequestOptions::default())
            .await
            .map_err(|e| CatalogError::from_transport(&path, e))?;
        Ok(())
    }

    /// 收到的推荐（分页）
    pub async fn mine(&self, page: PageRequest) -> CatalogResult<Paged<Recommendation>> {
        let path = "/recommendations";
        let response = self
            .transport
            .get(path, RequestOptions::with_params(page.to_query_pairs()))
            .await
            .map_err(|e| CatalogError::from_transport(path, e))?;

        response.json().map_err(|e| CatalogError::from_transport(path, e))
    }

    /// 忽略某部番剧的推荐
    pub async fn dismiss(&self, anime_id: i64) -> CatalogResult<()> {
        let path = format!("/recommendations/{}", anime_id);
        self.transport
            .delete(&path, RequestOptions::default())
            .await
            .map_err(|e| CatalogError::from_transport(&path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::{Method, MockRoute, MockTransport};
    use crate::models::Pagination;
    use serde_json::json;

    #[tokio::test]
    async fn test_mine_returns_paged_recommendations() {
        let body = json!({
            "data": [
                {"Initiator": 1, "Receiver": 2, "Anime": 20, "Seen": false, "CreatedAt": "2026-01-27T15:30:00Z"},
                {"Initiator": 3, "Receiver": 2, "Anime": 21, "Seen": true, "CreatedAt": "2026-02-01T08:00:00Z"}
            ],
            "pagination": Pagination::for_totals(2, 2, 5),
        });
        let mock = Arc::new(MockTransport::new().route(MockRoute::get("/recommendations").json(body)));
        let service = RecommendationService::new(mock.clone());

        let paged = service.mine(PageRequest::new(2, 2)).await.unwrap();
        assert_eq!(paged.items.len(), 2);
        assert_eq!(paged.items[1].anime, 21);
        assert_eq!(paged.pagination.total_pages, 3);
        assert!(paged.pagination.has_prev());

        let params = &mock.requests()[0].options.params;
        assert_eq!(params[0], ("pageNumber".to_string(), "2".to_string()));
    }

    #[tokio::test]
    async fn test_send_and_dismiss() {
        let mock = Arc::new(
            MockTransport::new()
                .route(MockRoute::new(Method::Post, "/recommendations/2/20"))
                .route(MockRoute::new(Method::Delete, "/recommendations/20")),
        );
        let service = RecommendationService::new(mock.clone());

        service.send(2, 20).await.unwrap();
        service.dismiss(20).await.unwrap();

        let methods: Vec<Method> = mock.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Post, Method::Delete]);
    }

    #[tokio::test]
    async fn test_dismiss_unknown_is_not_found() {
        let mock = Arc::new(MockTransport::new());
        let service = RecommendationService::new(mock);

        let err = service.dismiss(404).await.unwrap_err();
        assert!(err.is_not_found());
    }
}

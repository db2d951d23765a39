use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::order::use_cases::get_detail::{GetOrderDetailParams, GetOrderDetailUseCase};
use business::domain::order::use_cases::get_history::GetOrderHistoryUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, OrderSummaryResponse};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    get_history_use_case: Arc<dyn GetOrderHistoryUseCase>,
    get_detail_use_case: Arc<dyn GetOrderDetailUseCase>,
}

impl OrderApi {
    pub fn new(
        get_history_use_case: Arc<dyn GetOrderHistoryUseCase>,
        get_detail_use_case: Arc<dyn GetOrderDetailUseCase>,
    ) -> Self {
        Self {
            get_history_use_case,
            get_detail_use_case,
        }
    }
}

/// Order history API
#[OpenApi]
impl OrderApi {
    /// List past orders
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn history(&self) -> GetOrderHistoryResponse {
        match self.get_history_use_case.execute().await {
            Ok(orders) => GetOrderHistoryResponse::Ok(Json(
                orders.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GetOrderHistoryResponse::Unprocessable(json),
                    _ => GetOrderHistoryResponse::BadGateway(json),
                }
            }
        }
    }

    /// Get one order
    ///
    /// Includes the shipping address and ordered lines.
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn detail(&self, id: Path<i64>) -> GetOrderDetailResponse {
        match self
            .get_detail_use_case
            .execute(GetOrderDetailParams { id: id.0 })
            .await
        {
            Ok(order) => GetOrderDetailResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderDetailResponse::NotFound(json),
                    422 => GetOrderDetailResponse::Unprocessable(json),
                    _ => GetOrderDetailResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderSummaryResponse>>),
    #[oai(status = 422)]
    Unprocessable(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderDetailResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    Unprocessable(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

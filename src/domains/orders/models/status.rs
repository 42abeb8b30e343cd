use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::shared::errors::OrderError;

// =====================================================
// 주문 상태 / 결제 상태
// =====================================================
// 주문 상태 (status):
// - pending: 대기 중 (초기값)
// - processing: 결제 승인 후 처리 중
// - on_route / shipped: 배송 중
// - delivered / completed: 배송 완료
// - cancelled: 주문 취소
//
// 결제 상태 (payment_status):
// - pending: 결제 대기 (초기값)
// - approved: 결제 승인
// - rejected: 결제 거절
// =====================================================

/// 주문 상태
/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    OnRoute,
    Shipped,
    Delivered,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::OnRoute => "on_route",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "on_route" => Ok(OrderStatus::OnRoute),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderError::InvalidStatus(other.to_string())),
        }
    }
}

/// 결제 상태
/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Approved => "approved",
            PaymentStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "approved" => Ok(PaymentStatus::Approved),
            "rejected" => Ok(PaymentStatus::Rejected),
            other => Err(OrderError::InvalidPaymentStatus(other.to_string())),
        }
    }
}

/// 결제 코드 상태
/// Payment code status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentCodeStatus {
    Pending,
    Verified,
    Expired,
    Cancelled,
}

impl PaymentCodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentCodeStatus::Pending => "pending",
            PaymentCodeStatus::Verified => "verified",
            PaymentCodeStatus::Expired => "expired",
            PaymentCodeStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for PaymentCodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentCodeStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentCodeStatus::Pending),
            "verified" => Ok(PaymentCodeStatus::Verified),
            "expired" => Ok(PaymentCodeStatus::Expired),
            "cancelled" => Ok(PaymentCodeStatus::Cancelled),
            other => Err(OrderError::InvalidPaymentCodeStatus(other.to_string())),
        }
    }
}

// =====================================================
// 상태 전이 (State transitions)
// =====================================================

/// 주문 상태 변경 결과
/// Result of an order status update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusTransition {
    pub old_status: OrderStatus,
    pub new_status: OrderStatus,
}

/// 결제 상태 변경 결과 (주문 상태 변화 포함)
/// Result of a payment decision, including the order status it implies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransition {
    pub old_status: OrderStatus,
    pub new_status: OrderStatus,
    pub old_payment_status: PaymentStatus,
    pub new_payment_status: PaymentStatus,
}

impl PaymentTransition {
    /// 결제 승인(pending → approved)으로 pending 주문이 processing으로 넘어갔는지 여부
    /// Whether the decision promoted a still-pending order into processing
    pub fn promotes_order(&self) -> bool {
        self.old_status == OrderStatus::Pending
            && self.old_payment_status == PaymentStatus::Pending
            && self.new_payment_status == PaymentStatus::Approved
    }
}

/// 결제 결정 테이블
/// Payment decision table
///
/// | 주문 상태 | 현재 결제 상태 | 결정      | 결과 주문 상태 |
/// |-----------|----------------|-----------|----------------|
/// | pending   | pending        | approved  | processing     |
/// | (그 외)   | (그 외)        | (그 외)   | 변경 없음      |
///
/// 결제 승인은 누가 했든 (관리자 수동 승인, 결제 코드 검증)
/// 아직 pending인 주문을 processing으로 올린다.
/// 이미 진행된 주문(processing, shipped, ...)의 상태는 그대로 둔다.
pub fn apply_payment_decision(
    status: OrderStatus,
    payment_status: PaymentStatus,
    decision: PaymentStatus,
) -> PaymentTransition {
    let new_status = match (status, payment_status, decision) {
        (OrderStatus::Pending, PaymentStatus::Pending, PaymentStatus::Approved) => {
            OrderStatus::Processing
        }
        _ => status,
    };

    PaymentTransition {
        old_status: status,
        new_status,
        old_payment_status: payment_status,
        new_payment_status: decision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::OnRoute,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    const ALL_PAYMENT_STATUSES: [PaymentStatus; 3] = [
        PaymentStatus::Pending,
        PaymentStatus::Approved,
        PaymentStatus::Rejected,
    ];

    #[test]
    fn test_status_string_roundtrip() {
        for status in ALL_STATUSES {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        for status in ALL_PAYMENT_STATUSES {
            assert_eq!(status.as_str().parse::<PaymentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(matches!(
            "refunded".parse::<OrderStatus>(),
            Err(OrderError::InvalidStatus(value)) if value == "refunded"
        ));
        assert!(matches!(
            "paid".parse::<PaymentStatus>(),
            Err(OrderError::InvalidPaymentStatus(_))
        ));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(serde_json::to_value(OrderStatus::OnRoute).unwrap(), "on_route");
        assert_eq!(serde_json::to_value(PaymentCodeStatus::Verified).unwrap(), "verified");
    }

    #[test]
    fn test_approval_promotes_pending_order() {
        let transition = apply_payment_decision(
            OrderStatus::Pending,
            PaymentStatus::Pending,
            PaymentStatus::Approved,
        );

        assert_eq!(transition.new_status, OrderStatus::Processing);
        assert_eq!(transition.new_payment_status, PaymentStatus::Approved);
        assert!(transition.promotes_order());
    }

    #[test]
    fn test_approval_keeps_status_of_advanced_order() {
        for status in ALL_STATUSES.into_iter().filter(|s| *s != OrderStatus::Pending) {
            let transition =
                apply_payment_decision(status, PaymentStatus::Pending, PaymentStatus::Approved);
            assert_eq!(transition.old_status, status);
            assert_eq!(transition.new_status, status);
            assert_eq!(transition.new_payment_status, PaymentStatus::Approved);
            assert!(!transition.promotes_order());
        }
    }

    #[test]
    fn test_only_pending_to_approved_cascades() {
        for status in ALL_STATUSES {
            for current in ALL_PAYMENT_STATUSES {
                for decision in ALL_PAYMENT_STATUSES {
                    let transition = apply_payment_decision(status, current, decision);
                    let cascades = status == OrderStatus::Pending
                        && current == PaymentStatus::Pending
                        && decision == PaymentStatus::Approved;

                    assert_eq!(transition.promotes_order(), cascades);
                    assert_eq!(transition.new_payment_status, decision);
                    assert_eq!(transition.old_payment_status, current);
                    if !cascades {
                        assert_eq!(transition.new_status, status);
                    }
                }
            }
        }
    }
}

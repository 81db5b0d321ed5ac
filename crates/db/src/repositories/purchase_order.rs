//! Purchase order repository for `adq004`.
//!
//! The API acts on stage A1 (release). A2, A3 and A4 are carried read-only.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SelectTwo, Set, TransactionTrait,
};
use tracing::info;

use aprobaciones_core::approval::{ApprovalError, ApprovalFlag, ApprovalService, StageState};
use aprobaciones_core::purchase_order::UNLISTED_STATUS_CODES;
use aprobaciones_core::{DocumentKey, DocumentKind};
use aprobaciones_shared::types::{DateRange, PageRequest};

use crate::entities::{purchase_orders, suppliers};

/// An order joined with its supplier, if the supplier row exists.
pub type OrderWithSupplier = (purchase_orders::Model, Option<suppliers::Model>);

/// Counts shown on the purchase order dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderIndicators {
    /// Listable orders not yet released.
    pub pendientes_count: u64,
    /// Orders released today by the current user.
    pub aprobados_hoy_count: u64,
}

/// Purchase order repository.
#[derive(Debug)]
pub struct PurchaseOrderRepository {
    db: Arc<DatabaseConnection>,
}

impl PurchaseOrderRepository {
    /// Creates a new purchase order repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Counts pending orders and the user's releases on `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn indicators(&self, user: &str, today: NaiveDate) -> Result<OrderIndicators, DbErr> {
        let pendientes_count = purchase_orders::Entity::find()
            .filter(pending_condition())
            .count(self.db.as_ref())
            .await?;
        let aprobados_hoy_count = purchase_orders::Entity::find()
            .filter(approved_condition(user, DateRange::single_day(today)))
            .count(self.db.as_ref())
            .await?;

        Ok(OrderIndicators {
            pendientes_count,
            aprobados_hoy_count,
        })
    }

    /// Lists orders waiting for release, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_pending(&self, page: PageRequest) -> Result<Vec<OrderWithSupplier>, DbErr> {
        pending_select(page).all(self.db.as_ref()).await
    }

    /// Lists orders released by `user` inside `range`, latest release first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_approved(
        &self,
        user: &str,
        range: DateRange,
        page: PageRequest,
    ) -> Result<Vec<OrderWithSupplier>, DbErr> {
        approved_select(user, range, page)
            .all(self.db.as_ref())
            .await
    }

    /// Releases (stage A1) an order.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::NotFound` if no order has this key.
    pub async fn approve(
        &self,
        key: DocumentKey,
        actor: &str,
        now: NaiveDateTime,
    ) -> Result<purchase_orders::Model, ApprovalError> {
        let state = ApprovalService::approve(actor, now)?;
        let updated = self.write_release_stage(key, |_| state).await?;

        info!(location = key.location, number = key.number, actor, "purchase order approved");
        Ok(updated)
    }

    /// Reverts stage A1 of an order to pending.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::NotFound` if no order has this key.
    pub async fn unapprove(&self, key: DocumentKey) -> Result<purchase_orders::Model, ApprovalError> {
        let updated = self
            .write_release_stage(key, |order| ApprovalService::unapprove(order.ocp_fec))
            .await?;

        info!(location = key.location, number = key.number, "purchase order approval reverted");
        Ok(updated)
    }

    /// Loads the order and writes the stage computed from it, in one transaction.
    async fn write_release_stage<F>(
        &self,
        key: DocumentKey,
        next_state: F,
    ) -> Result<purchase_orders::Model, ApprovalError>
    where
        F: FnOnce(&purchase_orders::Model) -> StageState + Send,
    {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?;

        let order = purchase_orders::Entity::find_by_id((key.location, key.number))
            .one(&txn)
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?
            .ok_or(ApprovalError::NotFound {
                kind: DocumentKind::PurchaseOrder,
                key,
            })?;

        let state = next_state(&order);
        let mut active: purchase_orders::ActiveModel = order.into();
        apply_release_stage(&mut active, state);

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?;

        Ok(updated)
    }
}

type OrderSelect = SelectTwo<purchase_orders::Entity, suppliers::Entity>;

fn pending_select(page: PageRequest) -> OrderSelect {
    purchase_orders::Entity::find()
        .filter(pending_condition())
        .order_by_desc(purchase_orders::Column::OcpFec)
        .order_by_asc(purchase_orders::Column::LocCod)
        .order_by_asc(purchase_orders::Column::OcpNro)
        .offset(page.offset())
        .limit(page.limit())
        .find_also_related(suppliers::Entity)
}

/// Key columns break ties so pages never overlap.
fn approved_select(user: &str, range: DateRange, page: PageRequest) -> OrderSelect {
    purchase_orders::Entity::find()
        .filter(approved_condition(user, range))
        .order_by_desc(purchase_orders::Column::A1Dt)
        .order_by_desc(purchase_orders::Column::A1Hr)
        .order_by_asc(purchase_orders::Column::LocCod)
        .order_by_asc(purchase_orders::Column::OcpNro)
        .offset(page.offset())
        .limit(page.limit())
        .find_also_related(suppliers::Entity)
}

/// Not released and neither cancelled nor void.
fn pending_condition() -> Condition {
    Condition::all()
        .add(purchase_orders::Column::A1Ap.eq(ApprovalFlag::Unset.as_column()))
        .add(purchase_orders::Column::OcpPdt.is_not_in(UNLISTED_STATUS_CODES))
}

/// Released by `user` (case-insensitive) inside `range`.
fn approved_condition(user: &str, range: DateRange) -> Condition {
    Condition::all()
        .add(purchase_orders::Column::A1Ap.eq(ApprovalFlag::Set.as_column()))
        .add(
            Expr::expr(Func::lower(Expr::col((
                purchase_orders::Entity,
                purchase_orders::Column::A1Usu,
            ))))
            .eq(user.trim_end().to_lowercase()),
        )
        .add(purchase_orders::Column::A1Dt.between(range.fecha_desde, range.fecha_hasta))
}

/// Writes the whole A1 quadruple onto an active model.
pub(crate) fn apply_release_stage(active: &mut purchase_orders::ActiveModel, state: StageState) {
    active.a1_ap = Set(state.flag.as_column());
    active.a1_usu = Set(state.user);
    active.a1_dt = Set(state.date);
    active.a1_hr = Set(state.time);
}

#[cfg(test)]
#[path = "purchase_order_tests.rs"]
mod tests;

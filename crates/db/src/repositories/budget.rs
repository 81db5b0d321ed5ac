//! Budget repository for `cot013`.
//!
//! Listings and indicators filter on the two stage flags. Toggling only
//! touches stage 2 (gerencia, `pre_vbgg*`).

use std::sync::Arc;

use chrono::NaiveDateTime;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};
use tracing::{info, warn};

use aprobaciones_core::approval::{ApprovalError, ApprovalFlag, ApprovalService, StageState};
use aprobaciones_core::budget::{BudgetApprovalState, CANCELLED_STATUS_CODE};
use aprobaciones_core::{DocumentKey, DocumentKind};
use aprobaciones_shared::types::{DateRange, PageRequest};

use crate::entities::budgets;

/// Counts shown on the budget dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetIndicators {
    /// Released budgets waiting for management.
    pub pendientes: u64,
    /// Budgets signed off by management.
    pub aprobados: u64,
}

/// Optional filters for the approved listing.
#[derive(Debug, Clone, Default)]
pub struct ApprovedBudgetFilter {
    /// Approving user, matched case-insensitively.
    pub usuario: Option<String>,
    /// Approval date range.
    pub range: Option<DateRange>,
}

/// Budget repository.
#[derive(Debug)]
pub struct BudgetRepository {
    db: Arc<DatabaseConnection>,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Counts pending and approved budgets.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn indicators(&self) -> Result<BudgetIndicators, DbErr> {
        let pendientes = budgets::Entity::find()
            .filter(pending_condition())
            .count(self.db.as_ref())
            .await?;
        let aprobados = budgets::Entity::find()
            .filter(approved_condition(&ApprovedBudgetFilter::default()))
            .count(self.db.as_ref())
            .await?;

        Ok(BudgetIndicators {
            pendientes,
            aprobados,
        })
    }

    /// Lists released budgets waiting for management, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_pending(&self, page: PageRequest) -> Result<Vec<budgets::Model>, DbErr> {
        pending_select(page).all(self.db.as_ref()).await
    }

    /// Lists budgets signed off by management, latest approval first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_approved(
        &self,
        filter: &ApprovedBudgetFilter,
        page: PageRequest,
    ) -> Result<Vec<budgets::Model>, DbErr> {
        approved_select(filter, page).all(self.db.as_ref()).await
    }

    /// Signs off stage 2 of a budget.
    ///
    /// A budget that was never released is approved anyway; the inconsistency
    /// is only logged.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::NotFound` if no budget has this key.
    pub async fn approve(
        &self,
        key: DocumentKey,
        actor: &str,
        now: NaiveDateTime,
    ) -> Result<budgets::Model, ApprovalError> {
        let state = ApprovalService::approve(actor, now)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?;

        let budget = budgets::Entity::find_by_id((key.location, key.number))
            .one(&txn)
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?
            .ok_or(ApprovalError::NotFound {
                kind: DocumentKind::Budget,
                key,
            })?;

        let after = BudgetApprovalState::from_flags(
            ApprovalFlag::from_column(budget.vb_lib),
            ApprovalFlag::Set,
        );
        if !after.is_consistent() {
            warn!(
                location = key.location,
                number = key.number,
                "approving budget that was not released"
            );
        }

        let mut active: budgets::ActiveModel = budget.into();
        apply_management_stage(&mut active, state);

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?;

        info!(location = key.location, number = key.number, actor, "budget approved");
        Ok(updated)
    }

    /// Reverts stage 2 of a budget to pending.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::NotFound` if no budget has this key.
    pub async fn unapprove(&self, key: DocumentKey) -> Result<budgets::Model, ApprovalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?;

        let budget = budgets::Entity::find_by_id((key.location, key.number))
            .one(&txn)
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?
            .ok_or(ApprovalError::NotFound {
                kind: DocumentKind::Budget,
                key,
            })?;

        let state = ApprovalService::unapprove(budget.pre_fec);
        let mut active: budgets::ActiveModel = budget.into();
        apply_management_stage(&mut active, state);

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| ApprovalError::Database(e.to_string()))?;

        info!(location = key.location, number = key.number, "budget approval reverted");
        Ok(updated)
    }
}

fn pending_select(page: PageRequest) -> Select<budgets::Entity> {
    budgets::Entity::find()
        .filter(pending_condition())
        .order_by_desc(budgets::Column::PreFec)
        .order_by_asc(budgets::Column::LocCod)
        .order_by_asc(budgets::Column::PreNro)
        .offset(page.offset())
        .limit(page.limit())
}

/// Key columns break ties so pages never overlap.
fn approved_select(filter: &ApprovedBudgetFilter, page: PageRequest) -> Select<budgets::Entity> {
    budgets::Entity::find()
        .filter(approved_condition(filter))
        .order_by_desc(budgets::Column::VbggDt)
        .order_by_desc(budgets::Column::VbggTime)
        .order_by_asc(budgets::Column::LocCod)
        .order_by_asc(budgets::Column::PreNro)
        .offset(page.offset())
        .limit(page.limit())
}

/// Released, not signed off, not cancelled.
fn pending_condition() -> Condition {
    Condition::all()
        .add(budgets::Column::VbLib.eq(ApprovalFlag::Set.as_column()))
        .add(budgets::Column::Vbgg.eq(ApprovalFlag::Unset.as_column()))
        .add(budgets::Column::PreEst.ne(CANCELLED_STATUS_CODE))
}

fn approved_condition(filter: &ApprovedBudgetFilter) -> Condition {
    let mut condition =
        Condition::all().add(budgets::Column::Vbgg.eq(ApprovalFlag::Set.as_column()));

    if let Some(usuario) = filter.usuario.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        condition = condition.add(
            Expr::expr(Func::lower(Expr::col(budgets::Column::VbggUsu)))
                .eq(usuario.to_lowercase()),
        );
    }
    if let Some(range) = filter.range {
        condition = condition.add(
            budgets::Column::VbggDt.between(range.fecha_desde, range.fecha_hasta),
        );
    }
    condition
}

/// Writes the whole stage 2 quadruple onto an active model.
pub(crate) fn apply_management_stage(active: &mut budgets::ActiveModel, state: StageState) {
    active.vbgg = Set(state.flag.as_column());
    active.vbgg_usu = Set(state.user);
    active.vbgg_dt = Set(state.date);
    active.vbgg_time = Set(state.time);
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;

//! Domain events for contracts
//!
//! Every state change a contract makes is appended to its audit trail so a
//! bill can be explained line by line after the fact.

use serde::{Deserialize, Serialize};

use core_kernel::{BillingMonth, CallId, ContractId, Money};

/// Events recorded by a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractEvent {
    /// A billing month was opened and its fixed costs applied
    MonthStarted {
        contract_id: ContractId,
        period: BillingMonth,
        fixed_cost: Money,
    },

    /// Term deposit charged in the first month
    DepositCharged {
        contract_id: ContractId,
        amount: Money,
    },

    /// A call was priced
    CallBilled {
        contract_id: ContractId,
        call_id: CallId,
        free_minutes: u32,
        billed_minutes: u32,
    },

    /// Prepaid credit was replenished
    ToppedUp {
        contract_id: ContractId,
        amount: Money,
        balance: Money,
    },

    /// Term deposit returned at cancellation
    DepositRefunded {
        contract_id: ContractId,
        amount: Money,
    },

    /// Term deposit kept because the line was cancelled too early
    DepositForfeited {
        contract_id: ContractId,
        amount: Money,
    },

    /// Unused prepaid credit kept at cancellation
    CreditForfeited {
        contract_id: ContractId,
        credit: Money,
    },

    /// The contract was closed
    Cancelled {
        contract_id: ContractId,
        settlement: Money,
    },
}

impl ContractEvent {
    /// Returns the contract this event belongs to
    pub fn contract_id(&self) -> ContractId {
        match self {
            ContractEvent::MonthStarted { contract_id, .. }
            | ContractEvent::DepositCharged { contract_id, .. }
            | ContractEvent::CallBilled { contract_id, .. }
            | ContractEvent::ToppedUp { contract_id, .. }
            | ContractEvent::DepositRefunded { contract_id, .. }
            | ContractEvent::DepositForfeited { contract_id, .. }
            | ContractEvent::CreditForfeited { contract_id, .. }
            | ContractEvent::Cancelled { contract_id, .. } => *contract_id,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            ContractEvent::MonthStarted { .. } => "MonthStarted",
            ContractEvent::DepositCharged { .. } => "DepositCharged",
            ContractEvent::CallBilled { .. } => "CallBilled",
            ContractEvent::ToppedUp { .. } => "ToppedUp",
            ContractEvent::DepositRefunded { .. } => "DepositRefunded",
            ContractEvent::DepositForfeited { .. } => "DepositForfeited",
            ContractEvent::CreditForfeited { .. } => "CreditForfeited",
            ContractEvent::Cancelled { .. } => "Cancelled",
        }
    }
}

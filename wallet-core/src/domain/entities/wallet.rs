//! Wallet entity and related value objects
//!
//! This module contains the Wallet aggregate: a balance owned by a user that
//! can only be changed through deposits and withdrawals. Every mutation is
//! checked against the invariant `balance >= 0` before it is committed.

use chrono::{DateTime, Utc};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::domain::aggregate_root::AggregateRoot;
use crate::domain::value_objects::EntityId;
use crate::shared::constants::{
    BALANCE_OVERFLOW_MESSAGE, INITIAL_BALANCE, MIN_BALANCE, NEGATIVE_BALANCE_MESSAGE,
    TIMESTAMP_ORDER_MESSAGE,
};
use crate::shared::error::{ArgumentOutOfRangeError, WalletNotEnoughBalanceError};
use crate::shared::types::{Amount, Balance};

/// Business outcome of a withdrawal
pub type WithdrawResult = Result<(), WalletNotEnoughBalanceError>;

/// Input accepted by [`Wallet::create`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateWalletProps {
    pub user_id: EntityId,
}

/// State held by a wallet aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletProps {
    pub user_id: EntityId,
    pub balance: Balance,
}

/// Core wallet aggregate
///
/// Equality is by identity: two wallets with the same id are the same wallet
/// regardless of the balance each copy currently holds.
#[derive(Debug, Clone)]
pub struct Wallet {
    id: EntityId,
    props: WalletProps,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Wallet {
    /// Create a new wallet with a fresh identity and a zero balance
    pub fn create(create: CreateWalletProps) -> Self {
        let now = Utc::now();
        let wallet = Self {
            id: EntityId::generate(),
            props: WalletProps {
                user_id: create.user_id,
                balance: INITIAL_BALANCE,
            },
            created_at: now,
            updated_at: now,
        };

        debug!("Created wallet {} for user {}", wallet.id, wallet.props.user_id);
        wallet
    }

    /// Rebuild a wallet from previously stored state
    pub fn from_persistence(
        id: EntityId,
        props: WalletProps,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ArgumentOutOfRangeError> {
        if updated_at < created_at {
            return Err(ArgumentOutOfRangeError::new(TIMESTAMP_ORDER_MESSAGE));
        }
        Self::validate(&props)?;

        Ok(Self {
            id,
            props,
            created_at,
            updated_at,
        })
    }

    pub fn user_id(&self) -> &EntityId {
        &self.props.user_id
    }

    pub fn balance(&self) -> Balance {
        self.props.balance
    }

    /// Add `amount` to the balance.
    ///
    /// Negative amounts are not rejected up front; they fail only when the
    /// resulting balance would break the invariant, in which case the wallet
    /// is left untouched.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), ArgumentOutOfRangeError> {
        let balance = self
            .props
            .balance
            .checked_add(amount)
            .ok_or_else(|| self.overflow(amount))?;

        self.commit(WalletProps { balance, ..self.props })?;
        debug!("Deposited {} into wallet {}, balance {}", amount, self.id, self.props.balance);
        Ok(())
    }

    /// Subtract `amount` from the balance.
    ///
    /// The inner result is the business outcome: insufficient balance is
    /// reported there and never mutates the wallet. The outer error is the
    /// same invariant fault [`Wallet::deposit`] raises.
    pub fn withdraw(&mut self, amount: Amount) -> Result<WithdrawResult, ArgumentOutOfRangeError> {
        let Some(remaining) = self.props.balance.checked_sub(amount) else {
            return Err(self.overflow(amount));
        };

        if remaining < MIN_BALANCE {
            warn!(
                "Rejected withdrawal of {} from wallet {}: balance is {}",
                amount, self.id, self.props.balance
            );
            return Ok(Err(WalletNotEnoughBalanceError));
        }

        self.commit(WalletProps { balance: remaining, ..self.props })?;
        debug!("Withdrew {} from wallet {}, balance {}", amount, self.id, self.props.balance);
        Ok(Ok(()))
    }

    /// Protects the wallet invariant
    pub fn validate(props: &WalletProps) -> Result<(), ArgumentOutOfRangeError> {
        if props.balance < MIN_BALANCE {
            return Err(ArgumentOutOfRangeError::new(NEGATIVE_BALANCE_MESSAGE));
        }
        Ok(())
    }

    /// Convert to WalletInfo for serialization
    pub fn to_wallet_info(&self) -> WalletInfo {
        WalletInfo {
            id: self.id,
            user_id: self.props.user_id,
            balance: self.props.balance,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn commit(&mut self, candidate: WalletProps) -> Result<(), ArgumentOutOfRangeError> {
        Self::validate(&candidate).map_err(|e| {
            error!("Invariant violation on wallet {}: {}", self.id, e);
            e
        })?;

        self.props = candidate;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn overflow(&self, amount: Amount) -> ArgumentOutOfRangeError {
        error!(
            "Balance overflow on wallet {}: balance {}, amount {}",
            self.id, self.props.balance, amount
        );
        ArgumentOutOfRangeError::new(BALANCE_OVERFLOW_MESSAGE)
    }
}

impl AggregateRoot for Wallet {
    type Props = WalletProps;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn props(&self) -> &WalletProps {
        &self.props
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl PartialEq for Wallet {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Wallet {}

/// Wallet snapshot for persistence and transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInfo {
    pub id: EntityId,
    pub user_id: EntityId,
    pub balance: Balance,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Wallet> for WalletInfo {
    fn from(wallet: &Wallet) -> Self {
        wallet.to_wallet_info()
    }
}

impl TryFrom<WalletInfo> for Wallet {
    type Error = ArgumentOutOfRangeError;

    fn try_from(info: WalletInfo) -> Result<Self, Self::Error> {
        Wallet::from_persistence(
            info.id,
            WalletProps {
                user_id: info.user_id,
                balance: info.balance,
            },
            info.created_at,
            info.updated_at,
        )
    }
}

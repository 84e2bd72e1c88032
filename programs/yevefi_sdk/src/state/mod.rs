//! Account layouts of the Yevefi program and decoding of raw account data.

pub mod config;
pub mod position;
pub mod tick;
pub mod yevefi;

pub use self::yevefi::*;
pub use config::*;
pub use position::*;
pub use tick::*;


use crate::error::AccountError;
use anchor_lang::{AccountDeserialize, Discriminator};

/// Every account kind the client decodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum YevefiAccount {
    Yevefi(Box<Yevefi>),
    TickArray(Box<TickArray>),
    Position(Position),
    PositionBundle(PositionBundle),
    YevefisConfig(YevefisConfig),
    FeeTier(FeeTier),
}

impl YevefiAccount {
    /// Decodes raw account data by its 8-byte discriminator.
    ///
    /// # Errors
    /// * `AccountDataTooSmall` if there is no room for a discriminator.
    /// * `UnknownAccountDiscriminator` if the discriminator matches no Yevefi account.
    /// * `AccountDecodeFailed` if the body does not deserialize into the matched kind.
    pub fn decode(data: &[u8]) -> anchor_lang::Result<Self> {
        if data.len() < 8 {
            return Err(AccountError::AccountDataTooSmall.into());
        }
        let discriminator = &data[..8];

        if discriminator == Yevefi::DISCRIMINATOR {
            decode_as::<Yevefi>("Yevefi", data).map(|a| Self::Yevefi(Box::new(a)))
        } else if discriminator == TickArray::DISCRIMINATOR {
            decode_as::<TickArray>("TickArray", data).map(|a| Self::TickArray(Box::new(a)))
        } else if discriminator == Position::DISCRIMINATOR {
            decode_as::<Position>("Position", data).map(Self::Position)
        } else if discriminator == PositionBundle::DISCRIMINATOR {
            decode_as::<PositionBundle>("PositionBundle", data).map(Self::PositionBundle)
        } else if discriminator == YevefisConfig::DISCRIMINATOR {
            decode_as::<YevefisConfig>("YevefisConfig", data).map(Self::YevefisConfig)
        } else if discriminator == FeeTier::DISCRIMINATOR {
            decode_as::<FeeTier>("FeeTier", data).map(Self::FeeTier)
        } else {
            Err(AccountError::UnknownAccountDiscriminator.into())
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Yevefi(_) => "Yevefi",
            Self::TickArray(_) => "TickArray",
            Self::Position(_) => "Position",
            Self::PositionBundle(_) => "PositionBundle",
            Self::YevefisConfig(_) => "YevefisConfig",
            Self::FeeTier(_) => "FeeTier",
        }
    }
}

/// Deserializes one account kind, checking its discriminator.
pub fn decode_as<T: AccountDeserialize>(kind: &str, data: &[u8]) -> anchor_lang::Result<T> {
    let mut buf = data;
    T::try_deserialize(&mut buf).map_err(|_e| {
        #[cfg(not(feature = "no-log"))]
        anchor_lang::prelude::msg!("failed to decode {} account: {}", kind, _e);
        #[cfg(feature = "no-log")]
        let _ = kind;
        AccountError::AccountDecodeFailed.into()
    })
}

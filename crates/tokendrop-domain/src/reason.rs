//! Ineligibility reasons and their user-facing messages

/// Why the current wallet and quantity cannot claim right now
///
/// The set is closed; codes outside it map to [`IneligibilityReason::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IneligibilityReason {
    /// Remaining supply is below the requested quantity
    NotEnoughSupply,

    /// Requested quantity is below the tier minimum
    BelowMinimumQuantity,

    /// Current time is outside the claim window
    OutsideClaimWindow,

    /// No claim phase is active
    NoActiveClaimPhase,

    /// The contract has no claim conditions
    NoClaimConditionSet,

    /// Wallet is not on the allowlist
    AddressNotAllowed,

    /// Wallet cannot pay for the claim
    NotEnoughTokens,

    /// Wallet already claimed its allocation
    AlreadyClaimed,

    /// Wallet must wait before claiming again
    WaitBeforeNextClaim,

    /// No wallet connected
    NoWallet,

    /// Unrecognised reason
    Unknown,
}

impl IneligibilityReason {
    /// All reasons, in declaration order
    pub const ALL: [IneligibilityReason; 11] = [
        IneligibilityReason::NotEnoughSupply,
        IneligibilityReason::BelowMinimumQuantity,
        IneligibilityReason::OutsideClaimWindow,
        IneligibilityReason::NoActiveClaimPhase,
        IneligibilityReason::NoClaimConditionSet,
        IneligibilityReason::AddressNotAllowed,
        IneligibilityReason::NotEnoughTokens,
        IneligibilityReason::AlreadyClaimed,
        IneligibilityReason::WaitBeforeNextClaim,
        IneligibilityReason::NoWallet,
        IneligibilityReason::Unknown,
    ];

    /// Stable reason code
    pub fn code(&self) -> &'static str {
        match self {
            IneligibilityReason::NotEnoughSupply => "not-enough-supply",
            IneligibilityReason::BelowMinimumQuantity => "below-minimum-quantity",
            IneligibilityReason::OutsideClaimWindow => "outside-claim-window",
            IneligibilityReason::NoActiveClaimPhase => "no-active-claim-phase",
            IneligibilityReason::NoClaimConditionSet => "no-claim-condition-set",
            IneligibilityReason::AddressNotAllowed => "not-on-allowlist",
            IneligibilityReason::NotEnoughTokens => "not-enough-tokens",
            IneligibilityReason::AlreadyClaimed => "already-claimed",
            IneligibilityReason::WaitBeforeNextClaim => "wait-before-next-claim",
            IneligibilityReason::NoWallet => "wallet-not-connected",
            IneligibilityReason::Unknown => "unknown",
        }
    }

    /// Parse a reason code; unrecognised codes yield `None`
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.code() == code)
    }

    /// Parse a reason code, falling back to [`IneligibilityReason::Unknown`]
    pub fn from_code_lossy(code: &str) -> Self {
        Self::from_code(code).unwrap_or(IneligibilityReason::Unknown)
    }

    /// Plain description of the reason
    pub fn description(&self) -> &'static str {
        match self {
            IneligibilityReason::NotEnoughSupply => "There is not enough supply to claim.",
            IneligibilityReason::BelowMinimumQuantity => {
                "The requested quantity is below the minimum for this claim phase."
            }
            IneligibilityReason::OutsideClaimWindow => "The claim window is not open right now.",
            IneligibilityReason::NoActiveClaimPhase => {
                "There is no active claim phase at the moment. Please check back in later."
            }
            IneligibilityReason::NoClaimConditionSet => "There is no claim condition set.",
            IneligibilityReason::AddressNotAllowed => "This address is not on the allowlist.",
            IneligibilityReason::NotEnoughTokens => {
                "There are not enough tokens in the wallet to pay for the claim."
            }
            IneligibilityReason::AlreadyClaimed => "You have already claimed the token.",
            IneligibilityReason::WaitBeforeNextClaim => {
                "Not enough time since last claim transaction. Please wait."
            }
            IneligibilityReason::NoWallet => "No wallet connected.",
            IneligibilityReason::Unknown => "No claim conditions found.",
        }
    }
}

impl std::str::FromStr for IneligibilityReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Invalid ineligibility reason: {}", s))
    }
}

/// Button message for a list of reasons and the requested quantity
///
/// Only the first reason is described. An empty list yields an empty string.
///
/// # Examples
///
/// ```
/// use tokendrop_domain::IneligibilityReason;
/// use tokendrop_domain::reason::describe_ineligibility;
///
/// let message = describe_ineligibility(&[IneligibilityReason::AddressNotAllowed], 5);
/// assert_eq!(message, "You are not eligible to mint 5 tokens.");
/// ```
pub fn describe_ineligibility(reasons: &[IneligibilityReason], quantity: u64) -> String {
    let Some(reason) = reasons.first() else {
        return String::new();
    };

    match reason {
        IneligibilityReason::Unknown
        | IneligibilityReason::NoActiveClaimPhase
        | IneligibilityReason::NoClaimConditionSet => "This drop is not ready to be minted.".to_string(),
        IneligibilityReason::NotEnoughTokens => "You don't have enough currency to mint.".to_string(),
        IneligibilityReason::AddressNotAllowed if quantity > 1 => {
            format!("You are not eligible to mint {} tokens.", quantity)
        }
        IneligibilityReason::AddressNotAllowed => "You are not eligible to mint at this time.".to_string(),
        other => other.description().to_string(),
    }
}

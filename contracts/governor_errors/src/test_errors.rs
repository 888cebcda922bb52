#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ContractError, ErrorCategory, ErrorExt};
    use std::collections::BTreeSet;
    use std::vec::Vec;

    fn all_variants() -> Vec<ContractError> {
        std::vec![
            ContractError::NotInitialized,
            ContractError::AlreadyInitialized,
            ContractError::AdminOnly,
            ContractError::PendingAdminOnly,
            ContractError::VetoerOnly,
            ContractError::VetoPowerBurned,
            ContractError::ProposerAboveThreshold,
            ContractError::MinterOnly,
            ContractError::NotTokenOwner,
            ContractError::InvalidMinQuorumVotesBps,
            ContractError::InvalidMaxQuorumVotesBps,
            ContractError::MinQuorumVotesBpsGreaterThanMax,
            ContractError::InvalidVotingPeriod,
            ContractError::InvalidVotingDelay,
            ContractError::InvalidProposalThresholdBps,
            ContractError::InvalidTimelockDelay,
            ContractError::ProposalNotFound,
            ContractError::ActionsRequired,
            ContractError::TooManyActions,
            ContractError::BelowProposalThreshold,
            ContractError::ProposerHasLiveProposal,
            ContractError::ProposalNotSucceeded,
            ContractError::ProposalNotQueued,
            ContractError::TimelockNotElapsed,
            ContractError::ProposalStale,
            ContractError::ProposalAlreadyExecuted,
            ContractError::VotingClosed,
            ContractError::InvalidVoteType,
            ContractError::AlreadyVoted,
            ContractError::TokenNotFound,
            ContractError::VotesNotYetDetermined,
            ContractError::Overflow,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::AlreadyInitialized as u32, 2);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(ContractError::AdminOnly as u32, 100);
        assert_eq!(ContractError::PendingAdminOnly as u32, 101);
        assert_eq!(ContractError::VetoerOnly as u32, 102);
        assert_eq!(ContractError::VetoPowerBurned as u32, 103);
        assert_eq!(ContractError::ProposerAboveThreshold as u32, 104);
        assert_eq!(ContractError::MinterOnly as u32, 105);
        assert_eq!(ContractError::NotTokenOwner as u32, 106);
    }

    #[test]
    fn test_codes_parameters() {
        assert_eq!(ContractError::InvalidMinQuorumVotesBps as u32, 200);
        assert_eq!(ContractError::InvalidMaxQuorumVotesBps as u32, 201);
        assert_eq!(ContractError::MinQuorumVotesBpsGreaterThanMax as u32, 202);
        assert_eq!(ContractError::InvalidVotingPeriod as u32, 203);
        assert_eq!(ContractError::InvalidVotingDelay as u32, 204);
        assert_eq!(ContractError::InvalidProposalThresholdBps as u32, 205);
        assert_eq!(ContractError::InvalidTimelockDelay as u32, 206);
    }

    #[test]
    fn test_codes_proposal() {
        assert_eq!(ContractError::ProposalNotFound as u32, 300);
        assert_eq!(ContractError::ActionsRequired as u32, 301);
        assert_eq!(ContractError::TooManyActions as u32, 302);
        assert_eq!(ContractError::BelowProposalThreshold as u32, 303);
        assert_eq!(ContractError::ProposerHasLiveProposal as u32, 304);
        assert_eq!(ContractError::ProposalNotSucceeded as u32, 305);
        assert_eq!(ContractError::ProposalNotQueued as u32, 306);
        assert_eq!(ContractError::TimelockNotElapsed as u32, 307);
        assert_eq!(ContractError::ProposalStale as u32, 308);
        assert_eq!(ContractError::ProposalAlreadyExecuted as u32, 309);
    }

    #[test]
    fn test_codes_voting_and_token() {
        assert_eq!(ContractError::VotingClosed as u32, 400);
        assert_eq!(ContractError::InvalidVoteType as u32, 401);
        assert_eq!(ContractError::AlreadyVoted as u32, 402);
        assert_eq!(ContractError::TokenNotFound as u32, 500);
        assert_eq!(ContractError::VotesNotYetDetermined as u32, 501);
        assert_eq!(ContractError::Overflow as u32, 700);
    }

    // --- Category mapping tests ---

    #[test]
    fn test_category_matches_code_range() {
        for err in all_variants() {
            let expected = match err as u32 {
                1..=99 => ErrorCategory::Initialization,
                100..=199 => ErrorCategory::Authorization,
                200..=299 => ErrorCategory::Parameters,
                300..=399 => ErrorCategory::Proposal,
                400..=499 => ErrorCategory::Voting,
                500..=599 => ErrorCategory::Token,
                _ => ErrorCategory::Arithmetic,
            };
            assert_eq!(err.category(), expected, "{:?}", err);
        }
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_non_empty() {
        for err in all_variants() {
            assert!(!err.description().is_empty(), "{:?}", err);
        }
    }

    #[test]
    fn test_descriptions_unique() {
        let descriptions: BTreeSet<&'static str> =
            all_variants().iter().map(|e| e.description()).collect();
        assert_eq!(descriptions.len(), all_variants().len());
    }

    #[test]
    fn test_quorum_bound_descriptions() {
        assert_eq!(
            ContractError::InvalidMinQuorumVotesBps.description(),
            "invalid min quorum votes bps"
        );
        assert_eq!(
            ContractError::InvalidMaxQuorumVotesBps.description(),
            "invalid max quorum votes bps"
        );
        assert_eq!(
            ContractError::MinQuorumVotesBpsGreaterThanMax.description(),
            "min quorum votes bps greater than max"
        );
        assert_eq!(ContractError::AdminOnly.description(), "admin only");
    }

    #[test]
    fn test_codes_unique() {
        let codes: BTreeSet<u32> = all_variants().iter().map(|e| *e as u32).collect();
        assert_eq!(codes.len(), all_variants().len());
    }

    #[test]
    fn test_overflow() {
        let result: Result<u32, ContractError> =
            u32::MAX.checked_add(1).ok_or(ContractError::Overflow);
        assert_eq!(result, Err(ContractError::Overflow));
    }
}

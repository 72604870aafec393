//! Store key derivation.
//!
//! Every key is the hex of: one substore tag byte, then the UTF-8 of the
//! owning identifier, then optionally `/` and a sub-identifier. Prefixes end
//! in the separator so that a prefix scan never crosses into a different owner.
//! The layout must match the node byte for byte.

use crate::store::KEY_SEPARATOR;

// account store
pub const ACCOUNT_INFO_SUBSTORE: &str = "00";
pub const ACCOUNT_BANK_SUBSTORE: &str = "01";
pub const ACCOUNT_META_SUBSTORE: &str = "02";
pub const ACCOUNT_FOLLOWER_SUBSTORE: &str = "03";
pub const ACCOUNT_FOLLOWING_SUBSTORE: &str = "04";
pub const ACCOUNT_REWARD_SUBSTORE: &str = "05";
pub const ACCOUNT_RELATIONSHIP_SUBSTORE: &str = "07";
pub const ACCOUNT_BALANCE_HISTORY_SUBSTORE: &str = "08";
pub const ACCOUNT_GRANT_PUB_KEY_SUBSTORE: &str = "09";
pub const ACCOUNT_REWARD_HISTORY_SUBSTORE: &str = "0a";

// post store
pub const POST_INFO_SUBSTORE: &str = "00";
pub const POST_META_SUBSTORE: &str = "01";
pub const POST_REPORT_OR_UPVOTE_SUBSTORE: &str = "02";
pub const POST_COMMENT_SUBSTORE: &str = "03";
pub const POST_VIEW_SUBSTORE: &str = "04";
pub const POST_DONATION_SUBSTORE: &str = "05";

// validator store
pub const VALIDATOR_SUBSTORE: &str = "00";
pub const VALIDATOR_LIST_SUBSTORE: &str = "01";

// vote store
pub const DELEGATION_SUBSTORE: &str = "00";
pub const VOTER_SUBSTORE: &str = "01";
pub const VOTE_SUBSTORE: &str = "02";

// proposal store
pub const PROPOSAL_SUBSTORE: &str = "00";
pub const PROPOSAL_LIST_SUBSTORE: &str = "01";
pub const NEXT_PROPOSAL_ID_SUBSTORE: &str = "02";

// developer and infra stores
pub const DEVELOPER_SUBSTORE: &str = "00";
pub const DEVELOPER_LIST_SUBSTORE: &str = "01";
pub const INFRA_PROVIDER_SUBSTORE: &str = "00";
pub const INFRA_PROVIDER_LIST_SUBSTORE: &str = "01";

// param store
pub const ALLOCATION_PARAM_SUBSTORE: &str = "00";
pub const INFRA_INTERNAL_ALLOCATION_PARAM_SUBSTORE: &str = "01";
pub const EVALUATE_OF_CONTENT_VALUE_PARAM_SUBSTORE: &str = "02";
pub const DEVELOPER_PARAM_SUBSTORE: &str = "03";
pub const VOTE_PARAM_SUBSTORE: &str = "04";
pub const PROPOSAL_PARAM_SUBSTORE: &str = "05";
pub const VALIDATOR_PARAM_SUBSTORE: &str = "06";
pub const COIN_DAY_PARAM_SUBSTORE: &str = "07";
pub const BANDWIDTH_PARAM_SUBSTORE: &str = "08";
pub const ACCOUNT_PARAM_SUBSTORE: &str = "09";
pub const POST_PARAM_SUBSTORE: &str = "0a";

// global store
pub const TIME_EVENT_LIST_SUBSTORE: &str = "00";
pub const GLOBAL_META_SUBSTORE: &str = "01";
pub const INFLATION_POOL_SUBSTORE: &str = "02";
pub const CONSUMPTION_META_SUBSTORE: &str = "03";
pub const TPS_SUBSTORE: &str = "04";

/// Separator between a post's author and its id.
pub const PERMLINK_SEPARATOR: &str = "#";

fn hex_utf8(s: &str) -> String {
    hex::encode(s.as_bytes())
}

fn sep() -> String {
    hex_utf8(KEY_SEPARATOR)
}

fn key(substore: &str, id: &str) -> String {
    format!("{substore}{}", hex_utf8(id))
}

fn prefix(substore: &str, owner: &str) -> String {
    format!("{}{}", key(substore, owner), sep())
}

fn sub_key(prefix: String, sub: &str) -> String {
    prefix + &hex_utf8(sub)
}

/// Post permlink: `author#post_id`.
pub fn permlink(author: &str, post_id: &str) -> String {
    format!("{author}{PERMLINK_SEPARATOR}{post_id}")
}

// validator

pub fn validator_key(username: &str) -> String {
    key(VALIDATOR_SUBSTORE, username)
}

pub fn validator_list_key() -> String {
    VALIDATOR_LIST_SUBSTORE.to_string()
}

// vote

pub fn voter_key(username: &str) -> String {
    key(VOTER_SUBSTORE, username)
}

pub fn delegation_prefix(voter: &str) -> String {
    prefix(DELEGATION_SUBSTORE, voter)
}

pub fn delegation_key(voter: &str, delegator: &str) -> String {
    sub_key(delegation_prefix(voter), delegator)
}

pub fn vote_prefix(proposal_id: &str) -> String {
    prefix(VOTE_SUBSTORE, proposal_id)
}

pub fn vote_key(proposal_id: &str, voter: &str) -> String {
    sub_key(vote_prefix(proposal_id), voter)
}

// proposal

pub fn proposal_key(proposal_id: &str) -> String {
    key(PROPOSAL_SUBSTORE, proposal_id)
}

pub fn proposal_list_key() -> String {
    PROPOSAL_LIST_SUBSTORE.to_string()
}

pub fn next_proposal_id_key() -> String {
    NEXT_PROPOSAL_ID_SUBSTORE.to_string()
}

// developer / infra

pub fn developer_key(username: &str) -> String {
    key(DEVELOPER_SUBSTORE, username)
}

pub fn developer_list_key() -> String {
    DEVELOPER_LIST_SUBSTORE.to_string()
}

pub fn infra_provider_key(username: &str) -> String {
    key(INFRA_PROVIDER_SUBSTORE, username)
}

pub fn infra_provider_list_key() -> String {
    INFRA_PROVIDER_LIST_SUBSTORE.to_string()
}

// account

pub fn account_info_key(username: &str) -> String {
    key(ACCOUNT_INFO_SUBSTORE, username)
}

pub fn account_bank_key(username: &str) -> String {
    key(ACCOUNT_BANK_SUBSTORE, username)
}

pub fn account_meta_key(username: &str) -> String {
    key(ACCOUNT_META_SUBSTORE, username)
}

pub fn follower_prefix(me: &str) -> String {
    prefix(ACCOUNT_FOLLOWER_SUBSTORE, me)
}

pub fn follower_key(me: &str, follower: &str) -> String {
    sub_key(follower_prefix(me), follower)
}

pub fn following_prefix(me: &str) -> String {
    prefix(ACCOUNT_FOLLOWING_SUBSTORE, me)
}

pub fn following_key(me: &str, following: &str) -> String {
    sub_key(following_prefix(me), following)
}

pub fn reward_key(username: &str) -> String {
    key(ACCOUNT_REWARD_SUBSTORE, username)
}

pub fn relationship_prefix(me: &str) -> String {
    prefix(ACCOUNT_RELATIONSHIP_SUBSTORE, me)
}

pub fn relationship_key(me: &str, other: &str) -> String {
    sub_key(relationship_prefix(me), other)
}

pub fn balance_history_prefix(username: &str) -> String {
    prefix(ACCOUNT_BALANCE_HISTORY_SUBSTORE, username)
}

/// Key of one 100-entry history bucket, addressed by its decimal index.
pub fn balance_history_key(username: &str, bucket: u64) -> String {
    sub_key(balance_history_prefix(username), &bucket.to_string())
}

pub fn reward_history_prefix(username: &str) -> String {
    prefix(ACCOUNT_REWARD_HISTORY_SUBSTORE, username)
}

pub fn reward_history_key(username: &str, bucket: u64) -> String {
    sub_key(reward_history_prefix(username), &bucket.to_string())
}

pub fn grant_pub_key_prefix(username: &str) -> String {
    prefix(ACCOUNT_GRANT_PUB_KEY_SUBSTORE, username)
}

/// The sub-key is the raw bytes of the prefixed public key, so its hex is appended as is.
pub fn grant_pub_key_key(username: &str, pub_key_hex: &str) -> String {
    grant_pub_key_prefix(username) + &pub_key_hex.to_lowercase()
}

// post

pub fn post_info_prefix(author: &str) -> String {
    key(POST_INFO_SUBSTORE, &format!("{author}{PERMLINK_SEPARATOR}"))
}

pub fn post_info_key(permlink: &str) -> String {
    key(POST_INFO_SUBSTORE, permlink)
}

pub fn post_meta_key(permlink: &str) -> String {
    key(POST_META_SUBSTORE, permlink)
}

pub fn post_report_or_upvote_prefix(permlink: &str) -> String {
    prefix(POST_REPORT_OR_UPVOTE_SUBSTORE, permlink)
}

pub fn post_report_or_upvote_key(permlink: &str, user: &str) -> String {
    sub_key(post_report_or_upvote_prefix(permlink), user)
}

pub fn post_comment_prefix(permlink: &str) -> String {
    prefix(POST_COMMENT_SUBSTORE, permlink)
}

pub fn post_comment_key(permlink: &str, comment_permlink: &str) -> String {
    sub_key(post_comment_prefix(permlink), comment_permlink)
}

pub fn post_view_prefix(permlink: &str) -> String {
    prefix(POST_VIEW_SUBSTORE, permlink)
}

pub fn post_view_key(permlink: &str, viewer: &str) -> String {
    sub_key(post_view_prefix(permlink), viewer)
}

pub fn post_donations_prefix(permlink: &str) -> String {
    prefix(POST_DONATION_SUBSTORE, permlink)
}

pub fn post_donations_key(permlink: &str, donator: &str) -> String {
    sub_key(post_donations_prefix(permlink), donator)
}

// param singletons

pub fn evaluate_of_content_value_param_key() -> String {
    EVALUATE_OF_CONTENT_VALUE_PARAM_SUBSTORE.to_string()
}

pub fn global_allocation_param_key() -> String {
    ALLOCATION_PARAM_SUBSTORE.to_string()
}

pub fn infra_internal_allocation_param_key() -> String {
    INFRA_INTERNAL_ALLOCATION_PARAM_SUBSTORE.to_string()
}

pub fn developer_param_key() -> String {
    DEVELOPER_PARAM_SUBSTORE.to_string()
}

pub fn vote_param_key() -> String {
    VOTE_PARAM_SUBSTORE.to_string()
}

pub fn proposal_param_key() -> String {
    PROPOSAL_PARAM_SUBSTORE.to_string()
}

pub fn validator_param_key() -> String {
    VALIDATOR_PARAM_SUBSTORE.to_string()
}

pub fn coin_day_param_key() -> String {
    COIN_DAY_PARAM_SUBSTORE.to_string()
}

pub fn bandwidth_param_key() -> String {
    BANDWIDTH_PARAM_SUBSTORE.to_string()
}

pub fn account_param_key() -> String {
    ACCOUNT_PARAM_SUBSTORE.to_string()
}

pub fn post_param_key() -> String {
    POST_PARAM_SUBSTORE.to_string()
}

// global

pub fn time_event_key(unix_time: i64) -> String {
    key(TIME_EVENT_LIST_SUBSTORE, &unix_time.to_string())
}

pub fn global_meta_key() -> String {
    GLOBAL_META_SUBSTORE.to_string()
}

pub fn inflation_pool_key() -> String {
    INFLATION_POOL_SUBSTORE.to_string()
}

pub fn consumption_meta_key() -> String {
    CONSUMPTION_META_SUBSTORE.to_string()
}

pub fn tps_key() -> String {
    TPS_SUBSTORE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_account_info_key() {
        assert_eq!(account_info_key("alice"), "00616c696365");
        assert_eq!(account_info_key("alice"), format!("00{}", hex::encode("alice")));
    }

    #[test]
    fn test_prefixes_end_in_separator() {
        for p in [
            follower_prefix("alice"),
            following_prefix("alice"),
            relationship_prefix("alice"),
            balance_history_prefix("alice"),
            reward_history_prefix("alice"),
            grant_pub_key_prefix("alice"),
            delegation_prefix("val"),
            vote_prefix("3"),
            post_comment_prefix("alice#p1"),
            post_view_prefix("alice#p1"),
            post_donations_prefix("alice#p1"),
            post_report_or_upvote_prefix("alice#p1"),
        ] {
            assert!(p.ends_with("2f"), "{p} should end in the separator");
        }
    }

    #[test]
    fn test_prefix_is_strict_prefix_of_key() {
        let pairs = [
            (follower_prefix("alice"), follower_key("alice", "bob")),
            (following_prefix("alice"), following_key("alice", "bob")),
            (relationship_prefix("alice"), relationship_key("alice", "bob")),
            (balance_history_prefix("alice"), balance_history_key("alice", 0)),
            (reward_history_prefix("alice"), reward_history_key("alice", 12)),
            (delegation_prefix("val"), delegation_key("val", "bob")),
            (vote_prefix("1"), vote_key("1", "bob")),
            (post_info_prefix("alice"), post_info_key(&permlink("alice", "p1"))),
            (post_view_prefix("alice#p1"), post_view_key("alice#p1", "bob")),
        ];
        for (prefix, key) in pairs {
            assert!(key.starts_with(&prefix));
            assert!(key.len() > prefix.len());
        }
    }

    #[test]
    fn test_keys_injective_within_substore() {
        let names = ["a", "ab", "abc", "b", "ba", "alice", "alice1", "bob"];
        let keys: HashSet<String> = names.iter().map(|n| account_bank_key(n)).collect();
        assert_eq!(keys.len(), names.len());

        let composite: HashSet<String> = names
            .iter()
            .flat_map(|me| names.iter().map(move |other| follower_key(me, other)))
            .collect();
        assert_eq!(composite.len(), names.len() * names.len());
    }

    #[test]
    fn test_substores_partition_keys() {
        assert_ne!(account_info_key("alice"), account_bank_key("alice"));
        assert_ne!(account_bank_key("alice"), account_meta_key("alice"));
        assert_ne!(reward_key("alice"), account_info_key("alice"));
    }

    #[test]
    fn test_history_bucket_key_uses_decimal_index() {
        assert_eq!(
            balance_history_key("alice", 12),
            format!("08{}2f{}", hex::encode("alice"), hex::encode("12"))
        );
    }

    #[test]
    fn test_post_keys() {
        assert_eq!(permlink("alice", "p1"), "alice#p1");
        assert_eq!(post_info_key("alice#p1"), format!("00{}", hex::encode("alice#p1")));
        assert_eq!(post_info_prefix("alice"), format!("00{}", hex::encode("alice#")));
        assert_eq!(post_meta_key("alice#p1"), format!("01{}", hex::encode("alice#p1")));
    }

    #[test]
    fn test_grant_key_lowercases_pub_key_hex() {
        let key = grant_pub_key_key("alice", "EB5AE98721AB");
        assert!(key.ends_with("eb5ae98721ab"));
    }

    #[test]
    fn test_singleton_keys() {
        assert_eq!(validator_list_key(), "01");
        assert_eq!(post_param_key(), "0a");
        assert_eq!(tps_key(), "04");
        assert_eq!(time_event_key(1500), format!("00{}", hex::encode("1500")));
    }
}

//! Transaction messages.
//!
//! `Msg` is a closed set of variants, each carrying its own record. The wire
//! tag (`lino/transfer`, …) is a serialization detail: the variant serializes
//! as `{"type": tag, "value": record}`.
//!
//! Public keys inside messages are already in the `{type, value}` form. The
//! record constructors pick the key family, so nothing inspects field names
//! at encode time.

pub mod account;
pub mod post;
pub mod proposal;
pub mod stake;

use serde::Serialize;
use serde_json::Value;

use crate::codec::amount::encode_object;
use crate::error::LinoResult;

pub use account::*;
pub use post::*;
pub use proposal::*;
pub use stake::*;

macro_rules! messages {
    ($($variant:ident($record:ty) => $tag:literal,)+) => {
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "type", content = "value")]
        pub enum Msg {
            $(
                #[serde(rename = $tag)]
                $variant($record),
            )+
        }

        impl Msg {
            /// Wire type tag of this message.
            pub fn wire_type(&self) -> &'static str {
                match self {
                    $(Msg::$variant(_) => $tag,)+
                }
            }
        }

        $(
            impl From<$record> for Msg {
                fn from(record: $record) -> Self {
                    Msg::$variant(record)
                }
            }
        )+
    };
}

messages! {
    Register(RegisterMsg) => "lino/register",
    Transfer(TransferMsg) => "lino/transfer",
    Follow(FollowMsg) => "lino/follow",
    Unfollow(UnfollowMsg) => "lino/unfollow",
    Claim(ClaimMsg) => "lino/claim",
    ClaimInterest(ClaimInterestMsg) => "lino/claimInterest",
    UpdateAccount(UpdateAccountMsg) => "lino/updateAcc",
    Recover(RecoverMsg) => "lino/recover",
    GrantPermission(GrantPermissionMsg) => "lino/grantPermission",
    RevokePermission(RevokePermissionMsg) => "lino/revokePermission",
    PreAuthorization(PreAuthorizationMsg) => "lino/preAuthorizationPermission",
    CreatePost(CreatePostMsg) => "lino/createPost",
    Like(LikeMsg) => "lino/like",
    Donate(DonateMsg) => "lino/donate",
    ReportOrUpvote(ReportOrUpvoteMsg) => "lino/reportOrUpvote",
    DeletePost(DeletePostMsg) => "lino/deletePost",
    View(ViewMsg) => "lino/view",
    UpdatePost(UpdatePostMsg) => "lino/updatePost",
    ValidatorDeposit(ValidatorDepositMsg) => "lino/valDeposit",
    ValidatorWithdraw(ValidatorWithdrawMsg) => "lino/valWithdraw",
    ValidatorRevoke(ValidatorRevokeMsg) => "lino/valRevoke",
    VoterDeposit(VoterDepositMsg) => "lino/voterDeposit",
    VoterWithdraw(VoterWithdrawMsg) => "lino/voterWithdraw",
    VoterRevoke(VoterRevokeMsg) => "lino/voterRevoke",
    Delegate(DelegateMsg) => "lino/delegate",
    DelegatorWithdraw(DelegatorWithdrawMsg) => "lino/delegateWithdraw",
    RevokeDelegation(RevokeDelegationMsg) => "lino/delegateRevoke",
    DeveloperRegister(DeveloperRegisterMsg) => "lino/devRegister",
    DeveloperUpdate(DeveloperUpdateMsg) => "lino/devUpdate",
    DeveloperRevoke(DeveloperRevokeMsg) => "lino/devRevoke",
    ProviderReport(ProviderReportMsg) => "lino/providerReport",
    DeletePostContent(DeletePostContentMsg) => "lino/deletePostContent",
    UpgradeProtocol(UpgradeProtocolMsg) => "lino/upgradeProtocol",
    ChangeGlobalAllocationParam(ChangeGlobalAllocationParamMsg) => "lino/changeGlobalAllocationParam",
    ChangeEvaluateOfContentValueParam(ChangeEvaluateOfContentValueParamMsg) => "lino/changeEvaluateOfContentValueParam",
    ChangeInfraInternalAllocationParam(ChangeInfraInternalAllocationParamMsg) => "lino/changeInfraInternalAllocationParam",
    ChangeVoteParam(ChangeVoteParamMsg) => "lino/changeVoteParam",
    ChangeProposalParam(ChangeProposalParamMsg) => "lino/changeProposalParam",
    ChangeDeveloperParam(ChangeDeveloperParamMsg) => "lino/changeDeveloperParam",
    ChangeValidatorParam(ChangeValidatorParamMsg) => "lino/changeValidatorParam",
    ChangeBandwidthParam(ChangeBandwidthParamMsg) => "lino/changeBandwidthParam",
    ChangeAccountParam(ChangeAccountParamMsg) => "lino/changeAccountParam",
    ChangePostParam(ChangePostParamMsg) => "lino/changePostParam",
    ChangeCoinDayParam(ChangeCoinDayParamMsg) => "lino/changeCoinDayParam",
    VoteProposal(VoteProposalMsg) => "lino/voteProposal",
}

impl Msg {
    /// Serialize to the `{type, value}` JSON form, with any `Coin` amounts
    /// converted from LNO to the chain's base unit.
    pub fn encode(&self) -> LinoResult<Value> {
        encode_object(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::KeyPair;
    use crate::types::{Coin, DeveloperParam};

    #[test]
    fn test_transfer_encoding() {
        let msg: Msg = TransferMsg {
            sender: "alice".into(),
            receiver: "bob".into(),
            amount: "1".into(),
            memo: "hi".into(),
        }
        .into();
        assert_eq!(msg.wire_type(), "lino/transfer");
        let encoded = msg.encode().unwrap();
        assert_eq!(
            serde_json::to_string(&encoded).unwrap(),
            r#"{"type":"lino/transfer","value":{"sender":"alice","receiver":"bob","amount":"1","memo":"hi"}}"#
        );
    }

    #[test]
    fn test_register_keys_become_internal() {
        let kp = KeyPair::generate();
        let pk = kp.pub_key_hex();
        let msg: Msg = RegisterMsg::new("lino", "1", "alice", &pk, &pk, &pk)
            .unwrap()
            .into();
        let encoded = msg.encode().unwrap();
        assert_eq!(encoded["type"], "lino/register");
        assert_eq!(
            encoded["value"]["new_reset_public_key"]["type"],
            "tendermint/PubKeySecp256k1"
        );
    }

    #[test]
    fn test_validator_key_is_ed25519() {
        let prefixed = crate::crypto::keys::encode_validator_pub_key(&"22".repeat(32));
        let msg: Msg = ValidatorDepositMsg::new("val", "1000", &prefixed, "https://v.example")
            .unwrap()
            .into();
        let encoded = msg.encode().unwrap();
        assert_eq!(
            encoded["value"]["validator_public_key"]["type"],
            "tendermint/PubKeyEd25519"
        );
    }

    #[test]
    fn test_param_coins_are_scaled_up() {
        let param = DeveloperParam {
            developer_min_deposit: Coin::new("1000000"),
            developer_coin_return_interval_second: 604800,
            developer_coin_return_times: 7,
        };
        let msg: Msg = ChangeDeveloperParamMsg::new("lino", param, "raise").into();
        let encoded = msg.encode().unwrap();
        assert_eq!(encoded["type"], "lino/changeDeveloperParam");
        assert_eq!(
            encoded["value"]["parameter"]["developer_min_deposit"]["amount"],
            "100000000000"
        );
        assert_eq!(
            encoded["value"]["parameter"]["developer_coin_return_times"],
            7
        );
    }

    #[test]
    fn test_wire_types_are_unique() {
        let msgs: Vec<Msg> = vec![
            ClaimMsg { username: "a".into() }.into(),
            ClaimInterestMsg { username: "a".into() }.into(),
            VoterRevokeMsg { username: "a".into() }.into(),
            ValidatorRevokeMsg { username: "a".into() }.into(),
            DeveloperRevokeMsg { username: "a".into() }.into(),
        ];
        let tags: std::collections::HashSet<_> = msgs.iter().map(Msg::wire_type).collect();
        assert_eq!(tags.len(), msgs.len());
    }
}

//! End-to-end packing tests
//!
//! Byte-exact layout of a reference transfer, ordering and copy semantics.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use proton_chain::{
    Action, ChainId, PackedTransaction, PermissionLevel, SignedTransaction, SignerError,
    SigningRequest, Transaction, TransactionHeader,
};
use proton_config::TransactionSettings;
use proton_io::{varint, BinaryWriter, Packable, PackableExt};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn expiration() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).single().unwrap()
}

fn payload() -> Vec<u8> {
    (0u8..16).collect()
}

fn reference_transaction() -> Transaction {
    let mut tx = Transaction::new(TransactionHeader::new(expiration(), 100, 12345));
    tx.add_action(
        Action::new("eosio.token", "transfer")
            .with_authorization(PermissionLevel::new("alice", "active"))
            .with_data(payload()),
    );
    tx
}

fn push_string(out: &mut Vec<u8>, value: &str) {
    out.push(value.len() as u8);
    out.extend_from_slice(value.as_bytes());
}

#[test]
fn test_reference_transfer_layout() {
    init_tracing();

    let mut expected = vec![
        0x00, 0xF1, 0x53, 0x65, // expiration = 1700000000
        0x64, 0x00, // ref_block_num = 100
        0x39, 0x30, 0x00, 0x00, // ref_block_prefix = 12345
        0x00, // max_net_usage_words
        0x00, // max_cpu_usage_ms
        0x00, // delay_sec
        0x00, // context-free actions
        0x01, // actions
    ];
    push_string(&mut expected, "eosio.token");
    push_string(&mut expected, "transfer");
    expected.push(0x01);
    push_string(&mut expected, "alice");
    push_string(&mut expected, "active");
    expected.push(0x10);
    expected.extend_from_slice(&payload());
    expected.push(0x00); // extensions

    let tx = reference_transaction();
    let bytes = tx.to_packed_bytes().unwrap();
    assert_eq!(bytes, expected);
    assert_eq!(bytes.len(), tx.packed_size());
}

#[test]
fn test_each_pack_produces_a_fresh_buffer() {
    let mut tx = reference_transaction();
    let first = tx.to_packed_bytes().unwrap();

    tx.header_mut().delay_sec = 1;
    let second = tx.to_packed_bytes().unwrap();

    assert_ne!(first, second);
    assert_eq!(first, reference_transaction().to_packed_bytes().unwrap());
}

#[test]
fn test_pack_appends_to_existing_writer() {
    let tx = reference_transaction();
    let mut writer = BinaryWriter::new();
    writer.put_bytes(&[0xCA, 0xFE]);
    tx.pack(&mut writer).unwrap();

    let bytes = writer.into_bytes();
    assert_eq!(&bytes[..2], &[0xCA, 0xFE]);
    assert_eq!(&bytes[2..], tx.to_packed_bytes().unwrap().as_slice());
}

#[test]
fn test_clone_variants_do_not_cross_contaminate() {
    let original = reference_transaction();
    let original_bytes = original.to_packed_bytes().unwrap();

    let variants: Vec<Transaction> = ["owner", "active", "custom"]
        .iter()
        .map(|permission| {
            let mut draft = original.deep_copy();
            for action in draft.actions_mut().unwrap() {
                action.add_authorization(PermissionLevel::new("bob", *permission));
            }
            draft
        })
        .collect();

    for (variant, permission) in variants.iter().zip(["owner", "active", "custom"]) {
        assert_eq!(variant.actions()[0].authorization.len(), 2);
        assert_eq!(variant.actions()[0].authorization[1].permission, permission);
    }
    assert_eq!(original.actions()[0].authorization.len(), 1);
    assert_eq!(original.to_packed_bytes().unwrap(), original_bytes);
}

#[test]
fn test_concurrent_packing_of_independent_transactions() {
    let drafts: Vec<Transaction> = (0..4u32)
        .map(|i| {
            let mut tx = reference_transaction();
            tx.header_mut().delay_sec = i;
            tx
        })
        .collect();

    let handles: Vec<_> = drafts
        .iter()
        .cloned()
        .map(|tx| std::thread::spawn(move || tx.to_packed_bytes().unwrap()))
        .collect();

    for (handle, tx) in handles.into_iter().zip(&drafts) {
        assert_eq!(handle.join().unwrap(), tx.to_packed_bytes().unwrap());
    }
}

#[test]
fn test_build_sign_and_push_body() {
    init_tracing();

    let settings = TransactionSettings::from_toml_str("network = \"testnet\"").unwrap();
    let head_time = Utc.timestamp_opt(1_699_999_970, 0).single().unwrap();
    let block_id = format!("00000064{}39300000{}", "00".repeat(4), "11".repeat(20));

    let mut tx = Transaction::from_settings(&settings, &block_id, head_time).unwrap();
    tx.add_action(
        Action::new("eosio.token", "transfer")
            .with_authorization(PermissionLevel::active("alice"))
            .with_data(payload()),
    );
    assert_eq!(
        tx.to_packed_bytes().unwrap(),
        reference_transaction().to_packed_bytes().unwrap()
    );

    let chain_id = ChainId::from_settings(&settings).unwrap();
    let signer = |request: &SigningRequest<'_>| -> Result<String, SignerError> {
        Ok(format!("SIG_K1_{}", request.packed_trx.len()))
    };

    let mut signed = SignedTransaction::new(tx);
    signed.sign_with(&signer, &chain_id).unwrap();

    let body = PackedTransaction::from_signed(&signed).unwrap();
    assert_eq!(body.signatures, vec![format!("SIG_K1_{}", body.packed_trx.len() / 2)]);
    assert_eq!(
        hex::decode(&body.packed_trx).unwrap(),
        signed.transaction().to_packed_bytes().unwrap()
    );
}

fn arb_action() -> impl Strategy<Value = Action> {
    (
        "[a-z1-5.]{1,12}",
        "[a-z1-5.]{1,12}",
        prop::collection::vec(("[a-z1-5.]{1,12}", "[a-z]{1,12}"), 0..4),
        prop::collection::vec(any::<u8>(), 0..300),
    )
        .prop_map(|(account, name, authorization, data)| Action {
            account,
            name,
            authorization: authorization
                .into_iter()
                .map(|(actor, permission)| PermissionLevel::new(actor, permission))
                .collect(),
            data,
        })
}

proptest! {
    /// Actions appear in add order behind a prefix equal to their count.
    #[test]
    fn test_actions_keep_insertion_order(actions in prop::collection::vec(arb_action(), 0..20)) {
        let header = TransactionHeader::new(expiration(), 7, 9);
        let mut tx = Transaction::new(header.clone());
        for action in &actions {
            tx.add_action(action.clone());
        }

        let bytes = tx.to_packed_bytes().unwrap();
        let mut offset = header.packed_size();
        prop_assert_eq!(bytes[offset], 0x00);
        offset += 1;

        let (count, used) = varint::decode(&bytes[offset..]).unwrap();
        prop_assert_eq!(count as usize, actions.len());
        offset += used;

        for action in &actions {
            let packed = action.to_packed_bytes().unwrap();
            prop_assert_eq!(&bytes[offset..offset + packed.len()], packed.as_slice());
            offset += packed.len();
        }
        prop_assert_eq!(&bytes[offset..], &[0x00]);
        prop_assert_eq!(bytes.len(), tx.packed_size());
    }

    /// An unset action list and an empty one are indistinguishable on the wire.
    #[test]
    fn test_unset_actions_match_empty(
        ref_block_num in any::<u16>(),
        ref_block_prefix in any::<u32>(),
        max_net_usage_words in any::<u32>(),
        delay_sec in any::<u32>(),
    ) {
        let mut header = TransactionHeader::new(expiration(), ref_block_num, ref_block_prefix);
        header.max_net_usage_words = max_net_usage_words;
        header.delay_sec = delay_sec;

        let unset = Transaction::new(header.clone());
        let mut empty = Transaction::new(header);
        empty.set_actions(Some(Vec::new()));

        prop_assert_eq!(unset.to_packed_bytes().unwrap(), empty.to_packed_bytes().unwrap());
        prop_assert_eq!(*unset.to_packed_bytes().unwrap().last().unwrap(), 0x00);
    }

    /// Mutating a copy's authorizations never changes the original's bytes.
    #[test]
    fn test_deep_copy_independence(action in arb_action(), actor in "[a-z]{1,12}") {
        let mut tx = Transaction::new(TransactionHeader::new(expiration(), 1, 2));
        tx.add_action(action);
        let before = tx.to_packed_bytes().unwrap();

        let mut copy = tx.deep_copy();
        let copied = &mut copy.actions_mut().unwrap()[0];
        copied.add_authorization(PermissionLevel::active(actor));
        copied.data.push(0xFF);

        prop_assert_eq!(tx.to_packed_bytes().unwrap(), before);
        prop_assert_ne!(copy.to_packed_bytes().unwrap(), tx.to_packed_bytes().unwrap());
    }
}

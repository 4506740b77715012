use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use quill_types::{AssetId, Fixed64, TxId};
use quill_wallet_core::{
    select_unspent, BatchOutput, CandidateOrder, KeyWallet, Signer, TransactionBuilder,
    UnspentOutputRecord,
};

fn candidates(count: usize) -> Vec<UnspentOutputRecord> {
    (0..count)
        .map(|i| {
            let mut id = [0u8; 32];
            id[..8].copy_from_slice(&(i as u64).to_be_bytes());
            UnspentOutputRecord::new(TxId::new(id), (i % 4) as u16, Fixed64::new(1_000 + i as i64))
        })
        .collect()
}

fn select_bench(c: &mut Criterion) {
    let asset = AssetId::new([1u8; 32]);
    let mut group = c.benchmark_group("select_unspent");
    for count in [16usize, 256, 4096] {
        let records = candidates(count);
        let total: i64 = records.iter().map(|r| r.value.raw()).sum();
        let requested = Fixed64::new(total - 1);
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| select_unspent(&asset, black_box(requested), black_box(records)))
        });
    }
    group.finish();
}

fn order_bench(c: &mut Criterion) {
    let mut records = candidates(4096);
    records.reverse();

    c.bench_function("candidate_order_by_outpoint_4096", |b| {
        b.iter(|| {
            let mut copy = records.clone();
            CandidateOrder::ByOutpoint.apply(black_box(&mut copy));
            copy
        })
    });
}

fn transfer_bench(c: &mut Criterion) {
    let asset = AssetId::new([1u8; 32]);
    let wallet = KeyWallet::from_seed(&[5u8; 32]).unwrap();
    for record in candidates(64) {
        wallet.add_unspent(asset, record.tx_id, record.index, record.value);
    }
    let builder = TransactionBuilder::default();
    let batch = [BatchOutput::new(wallet.account().address().as_str(), "0.0005")];

    c.bench_function("build_transfer_64_candidates", |b| {
        b.iter(|| builder.build_transfer(&wallet, &wallet, &asset, black_box(&batch)))
    });
}

criterion_group!(benches, select_bench, order_bench, transfer_bench);
criterion_main!(benches);

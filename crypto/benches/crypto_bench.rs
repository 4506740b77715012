use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ed25519_sign_bench(c: &mut Criterion) {
    let kp = quill_crypto::generate_keypair();
    let msg = [42u8; 256];

    c.bench_function("ed25519_sign_256B", |b| {
        b.iter(|| quill_crypto::sign_message(black_box(&msg), &kp.private))
    });
}

fn blake2b_256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("blake2b_256_256B", |b| {
        b.iter(|| quill_crypto::blake2b_256(black_box(&data)))
    });
}

fn signature_contract_bench(c: &mut Criterion) {
    let kp = quill_crypto::keypair_from_seed(&[7u8; 32]);

    c.bench_function("create_signature_contract", |b| {
        b.iter(|| quill_crypto::create_signature_contract(black_box(&kp.public)))
    });
}

fn resolve_address_bench(c: &mut Criterion) {
    let kp = quill_crypto::keypair_from_seed(&[8u8; 32]);
    let contract = quill_crypto::create_signature_contract(&kp.public).unwrap();
    let address = quill_crypto::encode_address(&contract.program_hash);

    c.bench_function("resolve_address", |b| {
        b.iter(|| quill_crypto::resolve_address(black_box(address.as_str())))
    });
}

criterion_group!(
    benches,
    ed25519_sign_bench,
    blake2b_256_bench,
    signature_contract_bench,
    resolve_address_bench,
);
criterion_main!(benches);

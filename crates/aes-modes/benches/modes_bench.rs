use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{encrypt_block, Aes128, Aes128Key, CipherConfig};
use aes_modes::{cbc, ctr, ecb, ofb, ChunkSize, CounterWidth, SegmentSize};

const MESSAGE_BYTES: usize = 4096;

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let config = CipherConfig::from_key(&Aes128Key::from(key));

    let mut group = c.benchmark_group("block");
    group.throughput(Throughput::Bytes(16));
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| encrypt_block(&block, &config));
    });
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key = [0u8; 16];
    let mut iv = [0u8; 16];
    let mut message = vec![0u8; MESSAGE_BYTES];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    rng.fill_bytes(&mut message);
    let cipher = Aes128::new(CipherConfig::from_key(&Aes128Key::from(key)));
    let segment = SegmentSize::default();

    let mut group = c.benchmark_group("modes");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(MESSAGE_BYTES as u64));
    group.bench_function("ecb_encrypt", |b| {
        b.iter(|| ecb::encrypt(&cipher, &message, ChunkSize::BLOCK));
    });
    group.bench_function("cbc_encrypt", |b| {
        b.iter(|| cbc::encrypt(&cipher, &message, ChunkSize::BLOCK, &iv));
    });
    group.bench_function("ofb_encrypt", |b| {
        b.iter(|| ofb::encrypt(&cipher, &message, segment, &iv));
    });
    group.bench_function("ctr_encrypt", |b| {
        b.iter(|| ctr::encrypt(&cipher, &message, segment, &iv, CounterWidth::Low64));
    });
    group.finish();
}

criterion_group!(benches, bench_block, bench_modes);
criterion_main!(benches);

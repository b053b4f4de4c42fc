mod util;
use util::core_cycles;

use ecc25519::curve25519::{KeyPair, KEY_SIZE};
use ecc25519::x25519::{x25519, x25519_base};
use ecc25519::{CryptoRng, RngCore, RngError};
use sha2::{Sha256, Digest};

// Hash-based generator; only meant to feed the key generation benchmark.
struct BenchRng([u8; 32]);

impl RngCore for BenchRng {

    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(32) {
            let mut sh = Sha256::new();
            sh.update(&self.0);
            self.0.copy_from_slice(&sh.finalize());
            chunk.copy_from_slice(&self.0[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RngError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for BenchRng { }

fn bench_x25519() -> (f64, u8) {
    let z = core_cycles();
    let mut b = [0u8; 32];
    b[ 0.. 8].copy_from_slice(&z.to_le_bytes());
    b[ 8..16].copy_from_slice(&z.to_le_bytes());
    b[16..24].copy_from_slice(&z.to_le_bytes());
    b[24..32].copy_from_slice(&z.to_le_bytes());
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            b = x25519(&b, &b);
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[tt.len() >> 1] as f64) / 100.0, b[0])
}

fn bench_x25519_base() -> (f64, u8) {
    let z = core_cycles();
    let mut b = [0u8; 32];
    b[ 0.. 8].copy_from_slice(&z.to_le_bytes());
    b[ 8..16].copy_from_slice(&z.to_le_bytes());
    b[16..24].copy_from_slice(&z.to_le_bytes());
    b[24..32].copy_from_slice(&z.to_le_bytes());
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            b = x25519_base(&b);
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[tt.len() >> 1] as f64) / 100.0, b[0])
}

fn bench_keygen() -> (f64, u8) {
    let z = core_cycles();
    let mut rng = BenchRng([0u8; 32]);
    rng.0[..8].copy_from_slice(&z.to_le_bytes());
    let mut x = 0u8;
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..10 {
            let k = KeyPair::generate(&mut rng, KEY_SIZE).unwrap();
            x ^= k.public_point()[0];
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[tt.len() >> 1] as f64) / 10.0, x)
}

fn bench_shared_secret() -> (f64, u8) {
    let z = core_cycles();
    let mut rng = BenchRng([0u8; 32]);
    rng.0[..8].copy_from_slice(&z.to_le_bytes());
    let a = KeyPair::generate(&mut rng, KEY_SIZE).unwrap();
    let b = KeyPair::generate(&mut rng, KEY_SIZE).unwrap();
    let mut out = [0u8; KEY_SIZE];
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..10 {
            a.shared_secret(&b, &mut out).unwrap();
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[tt.len() >> 1] as f64) / 10.0, out[0])
}

fn main() {
    let mut bx = 0u8;

    let (v, x) = bench_x25519();
    bx ^= x;
    println!("X25519 (generic):              {:13.2}", v);
    let (v, x) = bench_x25519_base();
    bx ^= x;
    println!("X25519 (base point):           {:13.2}", v);
    let (v, x) = bench_keygen();
    bx ^= x;
    println!("KeyPair::generate:             {:13.2}", v);
    let (v, x) = bench_shared_secret();
    bx ^= x;
    println!("KeyPair::shared_secret:        {:13.2}", v);

    println!("{}", bx);
}

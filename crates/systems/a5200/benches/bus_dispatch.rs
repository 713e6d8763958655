use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use emu_a5200::cartridge::SUPER_BANK_SIZE;
use emu_a5200::{Atari5200, MachineConfig};
use emu_core::Memory6502;

/// Super cartridge with `banks` 32 KiB banks, each filled with its index
fn super_image(banks: usize) -> Vec<u8> {
    let mut image: Vec<u8> = (0..banks * SUPER_BANK_SIZE)
        .map(|i| (i / SUPER_BANK_SIZE) as u8)
        .collect();
    image[0] = 0x11;
    image
}

fn machine_with_cart(banks: usize) -> Atari5200 {
    let mut machine = Atari5200::new(MachineConfig::default());
    machine
        .insert_cartridge(super_image(banks))
        .expect("cartridge accepted by size");
    machine
}

fn bench_plain_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("bus_plain");
    let mut machine = machine_with_cart(2);

    group.bench_function("ram_write_read", |b| {
        b.iter(|| {
            for addr in 0x0200u16..0x0300 {
                machine.write(addr, addr as u8);
                black_box(machine.read(addr));
            }
        });
    });

    group.bench_function("rom_read", |b| {
        b.iter(|| {
            for addr in 0x4000u16..0x4100 {
                black_box(machine.read(addr));
            }
        });
    });

    group.finish();
}

fn bench_chip_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("bus_chips");
    let mut machine = machine_with_cart(2);

    // GTIA, POKEY and ANTIC register reads
    group.bench_function("register_reads", |b| {
        b.iter(|| {
            for reg in 0u16..0x20 {
                black_box(machine.read(0xC000 + reg));
                black_box(machine.read(0xE800 + (reg & 0x0F)));
                black_box(machine.read(0xD400 + (reg & 0x0F)));
            }
        });
    });

    group.finish();
}

fn bench_super_switching(c: &mut Criterion) {
    let mut group = c.benchmark_group("bus_super_switch");

    for banks in [2usize, 4, 16].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(banks), banks, |b, &banks| {
            let mut machine = machine_with_cart(banks);
            b.iter(|| {
                for select in 0u16..0x40 {
                    black_box(machine.read(0xBFC0 + select));
                }
                black_box(machine.bank());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_plain_access,
    bench_chip_dispatch,
    bench_super_switching
);
criterion_main!(benches);

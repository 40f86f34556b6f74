use criterion::Criterion;
use strictmath::fdlibm;

use bench_util::{bench_inputs2, configure_criterion, gen_pairs, host_binary};

fn nonzero_divisors(pairs: &mut [(f64, f64)]) {
    for (_, y) in pairs {
        if y.abs() < 1e-6 {
            *y = if *y >= 0.0 { 1e-6 } else { -1e-6 };
        }
    }
}

fn bench_remainder(c: &mut Criterion) {
    let smoke = [(5.3, 2.1), (-5.3, 2.1), (1.0, 0.5), (1.5, 0.5), (1e20, 3.0)];
    let mut common = gen_pairs(1024, -100.0, 100.0, 0x401b);
    nonzero_divisors(&mut common);
    let mut wide = gen_pairs(1024, -1e15, 1e15, 0x401c);
    nonzero_divisors(&mut wide);

    let remainder = host_binary("remainder", |x, y| x - (x / y).round_ties_even() * y);
    let fmod = host_binary("fmod", |x, y| x % y);

    for (label, inputs) in [("smoke", &smoke[..]), ("common", &common[..]), ("wide", &wide[..])] {
        let mut group = c.benchmark_group(format!("remainder/{label}"));
        bench_inputs2(&mut group, inputs, fdlibm::remainder, remainder);
        group.finish();

        let mut group = c.benchmark_group(format!("fmod/{label}"));
        bench_inputs2(&mut group, inputs, fdlibm::fmod, fmod);
        group.finish();
    }
}

fn main() {
    let mut c = configure_criterion();
    bench_remainder(&mut c);
    c.final_summary();
}

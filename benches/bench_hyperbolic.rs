use criterion::Criterion;
use strictmath::fdlibm;

use bench_util::{bench_inputs, configure_criterion, gen_range, host_unary};

fn bench_hyperbolic(c: &mut Criterion) {
    let smoke = [-20.0, -10.0, -1.0, -1e-6, 0.0, 1e-6, 1.0, 10.0, 20.0];
    let common = gen_range(1024, -5.0, 5.0, 0x357a);
    let wide = gen_range(1024, -710.0, 710.0, 0x357b);
    let unit = gen_range(1024, -0.999, 0.999, 0x357c);

    let sinh = host_unary("sinh", f64::sinh);
    let cosh = host_unary("cosh", f64::cosh);
    let tanh = host_unary("tanh", f64::tanh);
    let atanh = host_unary("atanh", f64::atanh);

    for (label, inputs) in [("smoke", &smoke[..]), ("common", &common[..]), ("wide", &wide[..])] {
        let mut group = c.benchmark_group(format!("sinh/{label}"));
        bench_inputs(&mut group, inputs, fdlibm::sinh, sinh);
        group.finish();

        let mut group = c.benchmark_group(format!("cosh/{label}"));
        bench_inputs(&mut group, inputs, fdlibm::cosh, cosh);
        group.finish();

        let mut group = c.benchmark_group(format!("tanh/{label}"));
        bench_inputs(&mut group, inputs, fdlibm::tanh, tanh);
        group.finish();
    }

    let mut group = c.benchmark_group("atanh/unit");
    bench_inputs(&mut group, &unit, fdlibm::atanh, atanh);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_hyperbolic(&mut c);
    c.final_summary();
}

use criterion::Criterion;
use strictmath::fdlibm;

use bench_util::{
    bench_inputs, bench_inputs2, configure_criterion, gen_pairs, gen_range, host_binary,
    host_unary,
};

fn bench_exp_log(c: &mut Criterion) {
    let exp_inputs = gen_range(1024, -700.0, 700.0, 0xe001);
    let near_zero = gen_range(1024, -1e-3, 1e-3, 0xe002);
    let positive = gen_range(1024, 1e-10, 1e10, 0xe003);
    let pow_pairs: Vec<(f64, f64)> = gen_pairs(1024, 0.0, 50.0, 0xe004)
        .into_iter()
        .map(|(x, y)| (x, y - 25.0))
        .collect();
    let hypot_pairs = gen_pairs(1024, -1e10, 1e10, 0xe005);

    let mut group = c.benchmark_group("exp/common");
    bench_inputs(&mut group, &exp_inputs, fdlibm::exp, host_unary("exp", f64::exp));
    group.finish();

    let mut group = c.benchmark_group("expm1/near_zero");
    bench_inputs(&mut group, &near_zero, fdlibm::expm1, host_unary("expm1", f64::exp_m1));
    group.finish();

    let mut group = c.benchmark_group("log/positive");
    bench_inputs(&mut group, &positive, fdlibm::log, host_unary("log", f64::ln));
    group.finish();

    let mut group = c.benchmark_group("log10/positive");
    bench_inputs(&mut group, &positive, fdlibm::log10, host_unary("log10", f64::log10));
    group.finish();

    let mut group = c.benchmark_group("log1p/near_zero");
    bench_inputs(&mut group, &near_zero, fdlibm::log1p, host_unary("log1p", f64::ln_1p));
    group.finish();

    let mut group = c.benchmark_group("sqrt/positive");
    bench_inputs(&mut group, &positive, fdlibm::sqrt, host_unary("sqrt", f64::sqrt));
    group.finish();

    let mut group = c.benchmark_group("cbrt/positive");
    bench_inputs(&mut group, &positive, fdlibm::cbrt, host_unary("cbrt", f64::cbrt));
    group.finish();

    let mut group = c.benchmark_group("pow/common");
    bench_inputs2(&mut group, &pow_pairs, fdlibm::pow, host_binary("pow", f64::powf));
    group.finish();

    let mut group = c.benchmark_group("hypot/common");
    bench_inputs2(&mut group, &hypot_pairs, fdlibm::hypot, host_binary("hypot", f64::hypot));
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_exp_log(&mut c);
    c.final_summary();
}

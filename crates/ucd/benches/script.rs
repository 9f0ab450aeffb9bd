use criterion::{criterion_group, criterion_main, Criterion};
use textrun_ucd::{script, ScriptCursor};

fn script_lookup(c: &mut Criterion) {
    c.bench_function("easy", |bench| {
        bench.iter(move || {
            script('a');
        });
    });

    c.bench_function("range", |bench| {
        bench.iter(move || {
            script('中');
        });
    });

    c.bench_function("cursor", |bench| {
        let text = "中文文本和一些 latin を混ぜた行です";
        bench.iter(move || {
            let mut cursor = ScriptCursor::new();
            for ch in text.chars() {
                cursor.script(ch);
            }
        });
    });
}

criterion_group!(benches, script_lookup);
criterion_main!(benches);

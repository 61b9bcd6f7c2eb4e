use bwcbump::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A declaration file with `count` patch releases per minor for majors 1 and 2.
fn declarations(count: u32) -> String {
    let mut contents = String::from("public class Version implements Comparable<Version> {\n");
    for major in 1..=2 {
        for minor in 0..20 {
            for revision in 0..count {
                let version = Version::new(major, minor, revision);
                contents.push_str(&format!(
                    "    public static final Version V_{} = new Version({}, org.apache.lucene.util.Version.LUCENE_9_{minor}_0);\n",
                    version.underscored(),
                    version.id(),
                ));
            }
        }
    }
    contents.push_str("    public static final Version CURRENT = V_2_19_0;\n}\n");
    contents
}

fn bwc_versions() -> String {
    let mut contents = String::from("BWC_VERSION:\r\n");
    for minor in 0..20 {
        contents.push_str(&format!("  - \"1.{minor}.0\"\r\n"));
    }
    contents
}

fn criterion_benchmark(c: &mut Criterion) {
    let contents = declarations(4);
    let previous = Version::new(2, 19, 3);
    let new = Version::new(2, 20, 0);
    c.bench_function("patch_declarations", |b| {
        b.iter(|| patch_declarations(black_box(&contents), &previous, &new, true))
    });

    let list = bwc_versions();
    c.bench_function("append_previous_version", |b| {
        b.iter(|| append_previous_version(black_box(&list), &previous))
    });

    c.bench_function("parse_version", |b| b.iter(|| Version::parse(black_box("2.19.3"))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

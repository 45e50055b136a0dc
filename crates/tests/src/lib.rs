//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 进程级单例行为 (共享状态、并发首次访问)
//! - 路由、覆盖、别名与未知 stream 的静默处理
//! - 配置文件 -> Registry 的端到端流程
//!
//! 所有测试共享同一个进程级 Registry，因此每个测试使用各自独有的 stream 名称。

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        let _ = contracts::ConfigVersion::V1;
        let _: contracts::StreamName = "cout".into();
    }
}

#[cfg(test)]
mod singleton_tests {
    use std::sync::{Arc, Barrier};
    use std::thread;

    use registry::{CaptureSink, Registry};

    #[test]
    fn test_mutations_visible_through_every_handle() {
        let first = Registry::instance();
        let second = Registry::instance();
        let capture = Arc::new(CaptureSink::new("capture"));

        first.add_sink("singleton-shared", capture.clone());
        second.print("singleton-shared", "seen").unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(second.has_stream("singleton-shared"));
        assert_eq!(capture.messages(), vec!["seen"]);
    }

    #[test]
    fn test_concurrent_first_access_yields_one_instance() {
        let callers = 32;
        let barrier = Arc::new(Barrier::new(callers));

        let handles: Vec<_> = (0..callers)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    Registry::instance() as *const Registry as usize
                })
            })
            .collect();

        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let first = addrs[0];
        assert!(addrs.iter().all(|&a| a == first));
        assert_eq!(first, Registry::instance() as *const Registry as usize);
    }

    #[test]
    fn test_concurrent_print_and_rebind_sees_whole_binding() {
        let old = Arc::new(CaptureSink::new("old"));
        let new = Arc::new(CaptureSink::new("new"));
        let registry = Registry::instance();
        registry.add_sink("singleton-race", old.clone());

        let printers: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(move || {
                    for i in 0..200 {
                        Registry::instance()
                            .print("singleton-race", &i.to_string())
                            .unwrap();
                    }
                })
            })
            .collect();

        registry.add_sink("singleton-race", new.clone());

        for printer in printers {
            printer.join().unwrap();
        }

        // Every message went to exactly one of the two sinks.
        assert_eq!(old.len() + new.len(), 800);
    }
}

#[cfg(test)]
mod routing_tests {
    use std::sync::Arc;

    use registry::{CaptureSink, Registry};

    #[test]
    fn test_hello_world_scenario() {
        let capture = Arc::new(CaptureSink::new("capture"));
        Registry::instance().add_sink("routing-cout", capture.clone());

        Registry::instance()
            .print("routing-cout", "Hello World")
            .unwrap();
        foo();

        assert_eq!(capture.messages(), vec!["Hello World", "Foo message"]);
    }

    fn foo() {
        Registry::instance()
            .print("routing-cout", "Foo message")
            .unwrap();
    }

    #[test]
    fn test_overwrite_delivers_only_to_new_sink() {
        let a = Arc::new(CaptureSink::new("a"));
        let b = Arc::new(CaptureSink::new("b"));
        let registry = Registry::instance();

        registry.add_sink("routing-overwrite", a.clone());
        registry.add_sink("routing-overwrite", b.clone());
        registry.print("routing-overwrite", "m").unwrap();

        assert!(a.is_empty());
        assert_eq!(b.messages(), vec!["m"]);
    }

    #[test]
    fn test_unknown_stream_is_silent() {
        let registry = Registry::instance();
        assert!(!registry.has_stream("routing-missing"));

        let before = registry.unrouted_count();
        assert!(registry.print("routing-missing", "x").is_ok());
        assert!(registry.unrouted_count() > before);
        assert!(!registry.has_stream("routing-missing"));
    }

    #[test]
    fn test_each_stream_reaches_only_its_sink() {
        let sink_a = Arc::new(CaptureSink::new("a"));
        let sink_b = Arc::new(CaptureSink::new("b"));
        let registry = Registry::instance();
        registry.add_sink("routing-a", sink_a.clone());
        registry.add_sink("routing-b", sink_b.clone());

        registry.print("routing-a", "m1").unwrap();
        assert_eq!(sink_a.messages(), vec!["m1"]);
        assert!(sink_b.is_empty());

        registry.print("routing-b", "m2").unwrap();
        assert_eq!(sink_a.messages(), vec!["m1"]);
        assert_eq!(sink_b.messages(), vec!["m2"]);
    }

    #[test]
    fn test_aliased_sink_observes_call_order() {
        let shared = Arc::new(CaptureSink::new("shared"));
        let registry = Registry::instance();
        registry.add_sink("routing-alias-1", shared.clone());
        registry.add_sink("routing-alias-2", shared.clone());

        registry.print("routing-alias-2", "first").unwrap();
        registry.print("routing-alias-1", "second").unwrap();

        assert_eq!(shared.messages(), vec!["first", "second"]);
    }
}

#[cfg(test)]
mod routing_properties {
    use std::collections::HashMap;
    use std::sync::Arc;

    use proptest::prelude::*;
    use registry::{CaptureSink, Registry};

    const STREAMS: [&str; 4] = ["a", "b", "c", ""];

    proptest! {
        /// Whatever the bindings, each sink receives exactly the messages
        /// printed to streams currently bound to it, in call order.
        #[test]
        fn prop_routing_matches_model(
            bindings in prop::collection::vec((0..STREAMS.len(), 0..3usize), 0..8),
            prints in prop::collection::vec((0..STREAMS.len(), "[a-z ]{0,8}"), 0..32),
        ) {
            let registry = Registry::new();
            let sinks: Vec<Arc<CaptureSink>> = (0..3)
                .map(|i| Arc::new(CaptureSink::new(format!("sink{i}"))))
                .collect();

            let mut model: HashMap<&str, usize> = HashMap::new();
            for (stream, sink) in &bindings {
                registry.add_sink(STREAMS[*stream], sinks[*sink].clone());
                model.insert(STREAMS[*stream], *sink);
            }

            let mut expected: Vec<Vec<String>> = vec![Vec::new(); sinks.len()];
            for (stream, message) in &prints {
                registry.print(STREAMS[*stream], message).unwrap();
                if let Some(&sink) = model.get(STREAMS[*stream]) {
                    expected[sink].push(message.clone());
                }
            }

            for (sink, want) in sinks.iter().zip(expected) {
                prop_assert_eq!(sink.messages(), want);
            }
        }
    }
}

#[cfg(test)]
mod e2e_tests {
    use config_loader::ConfigLoader;
    use registry::{install, Registry, RegistryBuilder};
    use tempfile::tempdir;

    /// End-to-end test: config file -> ConfigLoader -> Registry -> FileSink
    #[test]
    fn test_e2e_file_config() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("out").join("app.log");
        let config_path = dir.path().join("streamlog.toml");
        std::fs::write(
            &config_path,
            format!(
                r#"
[[sinks]]
name = "app_file"
sink_type = "file"
params = {{ path = "{}" }}

[[sinks]]
name = "void"
sink_type = "null"

[[streams]]
name = "cout"
sink = "app_file"

[[streams]]
name = "errors"
sink = "app_file"

[[streams]]
name = "debug"
sink = "void"
"#,
                log_path.display().to_string().replace('\\', "\\\\")
            ),
        )
        .unwrap();

        let blueprint = ConfigLoader::load_from_path(&config_path).unwrap();
        let registry = RegistryBuilder::new(blueprint).build().unwrap();

        registry.print("cout", "Hello World").unwrap();
        registry.print("debug", "dropped by null sink").unwrap();
        registry.print("errors", "Foo message").unwrap();
        registry.print("nowhere", "silently ignored").unwrap();
        registry.flush().unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content, "Hello World\nFoo message\n");
        assert_eq!(registry.unrouted_count(), 1);

        let metrics = registry.metrics();
        let emitted: u64 = metrics.iter().map(|(_, m)| m.emit_count).sum();
        assert_eq!(emitted, 3);
    }

    #[test]
    fn test_install_into_process_registry() {
        let blueprint = ConfigLoader::load_from_str(
            r#"
[[sinks]]
name = "tracing"
sink_type = "log"

[[streams]]
name = "e2e-installed"
sink = "tracing"
"#,
            config_loader::ConfigFormat::Toml,
        )
        .unwrap();

        let bound = install(Registry::instance(), &blueprint).unwrap();

        assert_eq!(bound, 1);
        assert!(Registry::instance().has_stream("e2e-installed"));
        Registry::instance()
            .print("e2e-installed", "through tracing")
            .unwrap();
    }
}

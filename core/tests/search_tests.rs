use linkrank_core::{CorpusBuilder, EngineConfig, ErrorKind, HitOrder, SearchOutcome};

fn corpus(config: EngineConfig) -> linkrank_core::SearchEngine {
    let mut b = CorpusBuilder::new(config).unwrap();
    b.add_document("./hub.txt", "El grafo central link:1 link:2").unwrap();
    b.add_document("./a.txt", "Un grafo pequeño link:0").unwrap();
    b.add_document("./b.txt", "grafo grafo de nodos link:0").unwrap();
    b.add_document("./c.txt", "nodos sueltos").unwrap();
    let (engine, report) = b.finish().unwrap();
    assert_eq!(report.documents, 4);
    assert_eq!(report.links_added, 4);
    engine
}

#[test]
fn hits_are_ordered_by_importance() {
    let engine = corpus(EngineConfig::default());
    let out = engine.search("GRAFO").unwrap();
    let names: Vec<&str> = out.hits().iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names[0], "./hub.txt");
    assert_eq!(out.hits().len(), 3);
    let b = out.hits().iter().find(|h| h.doc_id == 2).unwrap();
    assert_eq!(b.occurrences, 2);
}

#[test]
fn baseline_listing_repeats_documents() {
    let cfg = EngineConfig { dedup_hits: false, hit_order: HitOrder::Postings, ..Default::default() };
    let engine = corpus(cfg);
    let ids: Vec<u32> = engine.search("grafo").unwrap().hits().iter().map(|h| h.doc_id).collect();
    assert_eq!(ids, vec![0, 1, 2, 2]);
}

#[test]
fn stopwords_never_reach_the_index() {
    let engine = corpus(EngineConfig::default());
    for w in ["el", "un", "de"] {
        assert!(matches!(engine.search(w).unwrap(), SearchOutcome::NotFound { .. }));
    }
}

#[test]
fn top_documents_carry_names() {
    let engine = corpus(EngineConfig::default());
    let top = engine.top_documents(2).unwrap();
    assert_eq!(top[0].doc_id, 0);
    assert_eq!(top[0].name, "./hub.txt");
    assert!(top[0].score >= top[1].score);
}

#[test]
fn recompute_with_rejects_bad_damping() {
    let mut engine = corpus(EngineConfig::default());
    let before = engine.graph().scores().to_vec();
    let err = engine.recompute_with(0.0, 20).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(engine.graph().scores(), before.as_slice());
}

#[test]
fn unknown_document_name_is_not_found() {
    let engine = corpus(EngineConfig::default());
    assert_eq!(engine.document_name(9).unwrap_err().kind(), ErrorKind::NotFound);
}

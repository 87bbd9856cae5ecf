//! Feed post decode/encode matrix.

use lexwire::{decode, encode, CodecError, TaggedUnion, TemporalValue};
use lexwire_models::{
    BlobRef, Embed, FacetFeature, Image, Images, Post, PostLabels, RecordEmbed, RepoRecord,
    SelfLabels, StrongRef,
};
use serde_json::{json, Value};

fn bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).expect("serialize fixture")
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("valid JSON output")
}

fn image(n: u64) -> Value {
    json!({
        "image": {"$type": "blob", "ref": {"$link": format!("bafkimg{n}")}, "mimeType": "image/jpeg", "size": 1000 + n},
        "alt": format!("picture {n}")
    })
}

fn full_post() -> Value {
    json!({
        "text": "hello @alice.test see #rust",
        "facets": [
            {
                "index": {"byteStart": 6, "byteEnd": 17},
                "features": [{"$type": "app.bsky.richtext.facet#mention", "did": "did:plc:alice"}]
            },
            {
                "index": {"byteStart": 22, "byteEnd": 27},
                "features": [{"$type": "app.bsky.richtext.facet#tag", "tag": "rust"}]
            }
        ],
        "reply": {
            "root": {"uri": "at://did:plc:bob/app.bsky.feed.post/1", "cid": "bafyroot"},
            "parent": {"uri": "at://did:plc:bob/app.bsky.feed.post/2", "cid": "bafyparent"}
        },
        "embed": {
            "$type": "app.bsky.embed.images",
            "images": [image(1), image(2)]
        },
        "langs": ["en"],
        "labels": {"$type": "com.atproto.label.defs#selfLabels", "values": [{"val": "nudity"}]},
        "tags": ["lexicon"],
        "createdAt": "2024-03-01T12:00:00.000Z"
    })
}

// ── Round trips ───────────────────────────────────────────────────────────

#[test]
fn full_post_roundtrip() {
    let input = full_post();
    let post: Post = decode(&bytes(&input)).expect("decode");

    assert!(post.is_reply());
    let facets = post.facets.as_ref().expect("facets");
    assert_eq!(facets[0].index.slice(&post.text), Some("@alice.test"));
    assert!(matches!(
        facets[1].features[0].known(),
        Some(FacetFeature::Tag(tag)) if tag.tag == "rust"
    ));
    match post.embed.as_ref().and_then(TaggedUnion::known) {
        Some(Embed::Images(images)) => {
            assert_eq!(images.images.len(), 2);
            assert_eq!(images.images[1].image.cid(), "bafkimg2");
        }
        other => panic!("expected images embed, got {other:?}"),
    }
    assert!(matches!(
        post.labels.as_ref().and_then(TaggedUnion::known),
        Some(PostLabels::SelfLabels(labels)) if labels.values[0].val == "nudity"
    ));

    assert_eq!(as_json(&encode(&post)), input);
}

#[test]
fn minimal_post_omits_absent_fields() {
    let created_at = TemporalValue::parse("2024-03-01T12:00:00+01:00").expect("timestamp");
    let post = Post::new("gm", created_at);
    assert_eq!(
        encode(&post),
        br#"{"text":"gm","createdAt":"2024-03-01T11:00:00.000Z"}"#.to_vec()
    );

    let nulls = json!({"text": "gm", "facets": null, "embed": null, "createdAt": "2024-03-01T11:00:00Z"});
    let decoded: Post = decode(&bytes(&nulls)).expect("null optionals");
    assert_eq!(decoded, post);
}

#[test]
fn record_and_external_embeds() {
    let quote = json!({
        "text": "quoting",
        "embed": {
            "$type": "app.bsky.embed.record",
            "record": {"uri": "at://did:plc:carol/app.bsky.feed.post/9", "cid": "bafyq"}
        },
        "createdAt": "2024-01-01T00:00:00.000Z"
    });
    let post: Post = decode(&bytes(&quote)).expect("decode");
    assert_eq!(
        post.embed.as_ref().and_then(TaggedUnion::known),
        Some(&Embed::Record(RecordEmbed {
            record: StrongRef::new("at://did:plc:carol/app.bsky.feed.post/9", "bafyq"),
        }))
    );
    assert_eq!(as_json(&encode(&post)), quote);

    let card = json!({
        "text": "link",
        "embed": {
            "$type": "app.bsky.embed.external",
            "external": {
                "uri": "https://example.com",
                "title": "Example",
                "description": "",
                "thumb": {"cid": "bafylegacy", "mimeType": "image/png"}
            }
        },
        "createdAt": "2024-01-01T00:00:00.000Z"
    });
    let post: Post = decode(&bytes(&card)).expect("decode");
    match post.embed.as_ref().and_then(TaggedUnion::known) {
        Some(Embed::External(external)) => {
            assert_eq!(external.external.thumb.as_ref().and_then(BlobRef::size), None);
        }
        other => panic!("expected external embed, got {other:?}"),
    }
    assert_eq!(as_json(&encode(&post)), card);
}

// ── Open unions inside a post ─────────────────────────────────────────────

#[test]
fn unknown_embed_survives_reencode() {
    let input = json!({
        "text": "video!",
        "embed": {
            "$type": "app.bsky.embed.video",
            "video": {"$type": "blob", "ref": {"$link": "bafyvid"}, "mimeType": "video/mp4", "size": 9},
            "captions": [{"lang": "en"}]
        },
        "createdAt": "2024-01-01T00:00:00.000Z"
    });
    let post: Post = decode(&bytes(&input)).expect("decode");
    let embed = post.embed.as_ref().expect("embed");
    assert!(!embed.is_known());
    assert_eq!(embed.tag(), "app.bsky.embed.video");
    assert_eq!(as_json(&encode(&post)), input);
}

#[test]
fn corrupt_known_embed_fails_with_path() {
    let mut input = full_post();
    input["embed"]["images"][1]["alt"] = json!(42);
    let err = decode::<Post>(&bytes(&input)).expect_err("bad alt");
    assert_eq!(err.path(), "embed.images[1].alt");
    assert!(matches!(err, CodecError::Field { field: "embed", .. }));
    assert!(matches!(
        err.root_cause(),
        CodecError::TypeMismatch {
            expected: "string",
            found: "number"
        }
    ));
}

#[test]
fn embed_without_discriminator_is_rejected() {
    let mut input = full_post();
    input["embed"].as_object_mut().expect("embed").remove("$type");
    let err = decode::<Post>(&bytes(&input)).expect_err("no $type");
    assert!(matches!(
        err.root_cause(),
        CodecError::MissingDiscriminator { field: "$type" }
    ));
}

// ── Bounds ────────────────────────────────────────────────────────────────

#[test]
fn bounded_fields_truncate_on_encode() {
    let mut input = full_post();
    input["langs"] = json!(["en", "fr", "de", "ja", "pt"]);
    input["tags"] = json!(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
    input["embed"]["images"] = json!([image(1), image(2), image(3), image(4), image(5), image(6)]);

    let post: Post = decode(&bytes(&input)).expect("over-length input decodes");
    assert_eq!(post.langs.as_ref().map(|l| l.len()), Some(5));
    assert_eq!(post.tags.as_ref().map(|t| t.len()), Some(10));

    let out = as_json(&encode(&post));
    assert_eq!(out["langs"], json!(["en", "fr", "de"]));
    assert_eq!(out["tags"], json!(["a", "b", "c", "d", "e", "f", "g", "h"]));
    assert_eq!(
        out["embed"]["images"],
        json!([image(1), image(2), image(3), image(4)])
    );
}

#[test]
fn images_embed_built_in_code() {
    let images: Images = Images {
        images: (0..5)
            .map(|n| Image {
                image: BlobRef::new(format!("bafk{n}"), "image/png", n),
                alt: String::new(),
                aspect_ratio: None,
            })
            .collect(),
    };
    assert!(images.images.is_truncating());
    let union = TaggedUnion::<Embed>::from(Embed::Images(images));
    let out = as_json(&encode(&union));
    assert_eq!(out["$type"], json!("app.bsky.embed.images"));
    assert_eq!(out["images"].as_array().map(Vec::len), Some(4));
}

// ── Repository records ────────────────────────────────────────────────────

#[test]
fn repo_records_dispatch_on_collection() {
    let records = vec![
        json!({"$type": "app.bsky.feed.post", "text": "hi", "createdAt": "2024-01-01T00:00:00.000Z"}),
        json!({"$type": "app.bsky.feed.like", "subject": {"uri": "at://x/y/z", "cid": "bafy"}, "createdAt": "2024-01-01T00:00:00.000Z"}),
        json!({"$type": "app.bsky.graph.follow", "subject": "did:plc:dan", "createdAt": "2024-01-01T00:00:00.000Z"}),
        json!({"$type": "app.bsky.actor.profile", "displayName": "Dan"}),
    ];
    let decoded: Vec<TaggedUnion<RepoRecord>> = records
        .iter()
        .map(|r| decode(&bytes(r)).expect("decode"))
        .collect();

    assert!(matches!(decoded[0].known(), Some(RepoRecord::Post(p)) if p.text == "hi"));
    assert!(matches!(decoded[1].known(), Some(RepoRecord::Like(l)) if l.subject.cid == "bafy"));
    assert!(matches!(decoded[2].known(), Some(RepoRecord::Follow(f)) if f.subject == "did:plc:dan"));
    assert_eq!(decoded[3].tag(), "app.bsky.actor.profile");

    for (record, original) in decoded.iter().zip(&records) {
        assert_eq!(&as_json(&encode(record)), original);
    }
}

#[test]
fn repo_record_keeps_unmodeled_post_fields() {
    let input = json!({
        "$type": "app.bsky.feed.post",
        "text": "posted from elsewhere",
        "via": "app.example.client",
        "createdAt": "2024-01-01T00:00:00.000Z"
    });
    let record: TaggedUnion<RepoRecord> = decode(&bytes(&input)).expect("decode");
    assert!(matches!(record.known(), Some(RepoRecord::Post(_))));
    assert_eq!(
        record.extra_fields().and_then(|extra| extra.get("via")),
        Some(&lexwire::AnyValue::from("app.example.client"))
    );
    assert_eq!(as_json(&encode(&record)), input);
}

#[test]
fn self_labels_builder() {
    let labels = SelfLabels::new(["porn", "graphic-media"]);
    let union: TaggedUnion<PostLabels> = PostLabels::SelfLabels(labels).into();
    assert_eq!(
        as_json(&encode(&union)),
        json!({
            "$type": "com.atproto.label.defs#selfLabels",
            "values": [{"val": "porn"}, {"val": "graphic-media"}]
        })
    );
}

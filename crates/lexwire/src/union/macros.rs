/// Declares a union enum together with its static variant table.
///
/// Every payload type must implement [`Record`](crate::Record). The generated
/// enum implements [`UnionSchema`](crate::UnionSchema), so it is used on the
/// wire as `TaggedUnion<Enum>`.
///
/// ```
/// use lexwire::record::{FieldWriter, Fields};
/// use lexwire::{lex_union, CodecError, Lexicon, Record, TaggedUnion};
///
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct Mention {
///     pub did: String,
/// }
///
/// impl Record for Mention {
///     fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
///         Ok(Self { did: fields.required("did")? })
///     }
///
///     fn encode_fields(&self, out: &mut FieldWriter) {
///         out.field("did", &self.did);
///     }
/// }
///
/// lex_union! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub enum Feature {
///         "app.bsky.richtext.facet#mention" => Mention(Mention),
///     }
/// }
///
/// let feature = TaggedUnion::<Feature>::from(Feature::Mention(Mention {
///     did: "did:plc:abc".into(),
/// }));
/// let bytes = lexwire::encode(&feature);
/// assert_eq!(
///     bytes,
///     br#"{"$type":"app.bsky.richtext.facet#mention","did":"did:plc:abc"}"#.to_vec()
/// );
/// ```
#[macro_export]
macro_rules! lex_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $tag:literal => $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        impl $crate::UnionSchema for $name {
            const NAME: &'static str = stringify!($name);

            fn variants() -> &'static [$crate::union::Variant<Self>] {
                $(
                    #[allow(non_snake_case)]
                    fn $variant(
                        fields: &$crate::record::Fields<'_>,
                    ) -> ::core::result::Result<$name, $crate::CodecError> {
                        <$ty as $crate::Record>::decode_fields(fields).map($name::$variant)
                    }
                )+

                static VARIANTS: &[$crate::union::Variant<$name>] = &[
                    $(
                        $crate::union::Variant {
                            tag: $tag,
                            decode: $variant,
                        },
                    )+
                ];
                VARIANTS
            }

            fn registry() -> &'static $crate::union::VariantRegistry<Self> {
                static REGISTRY: ::std::sync::OnceLock<$crate::union::VariantRegistry<$name>> =
                    ::std::sync::OnceLock::new();
                REGISTRY.get_or_init(|| {
                    $crate::union::VariantRegistry::build(
                        <$name as $crate::UnionSchema>::NAME,
                        <$name as $crate::UnionSchema>::variants(),
                    )
                })
            }

            fn tag(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => $tag, )+
                }
            }

            fn encode_fields(&self, out: &mut $crate::record::FieldWriter) {
                match self {
                    $( $name::$variant(inner) => <$ty as $crate::Record>::encode_fields(inner, out), )+
                }
            }
        }
    };
}

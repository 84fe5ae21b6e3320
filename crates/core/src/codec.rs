use bytes::{Buf, BufMut, Bytes};
use tonic::codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder};
use tonic::Status;

/// Byte-copy codec.
///
/// The stub prost-encodes the request before the exchange and decodes the
/// response after it, so the channel only ever sees finished payloads. One
/// `Grpc<Channel>` therefore serves every method.
#[derive(Debug, Clone, Default)]
pub struct IdentityCodec;

impl Codec for IdentityCodec {
    type Encode = Bytes;
    type Decode = Bytes;
    type Encoder = IdentityEncoder;
    type Decoder = IdentityDecoder;

    fn encoder(&mut self) -> Self::Encoder {
        IdentityEncoder
    }

    fn decoder(&mut self) -> Self::Decoder {
        IdentityDecoder
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentityEncoder;

impl Encoder for IdentityEncoder {
    type Item = Bytes;
    type Error = Status;

    fn encode(&mut self, item: Bytes, dst: &mut EncodeBuf<'_>) -> Result<(), Status> {
        dst.put(item);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentityDecoder;

impl Decoder for IdentityDecoder {
    type Item = Bytes;
    type Error = Status;

    fn decode(&mut self, src: &mut DecodeBuf<'_>) -> Result<Option<Bytes>, Status> {
        Ok(Some(src.copy_to_bytes(src.remaining())))
    }
}

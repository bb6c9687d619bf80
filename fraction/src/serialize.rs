use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
use ark_std::{
    io::{Read, Write},
    vec::*,
};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};

use crate::Fraction;

// Both parts are written as little-endian two's complement byte strings.
impl CanonicalSerialize for Fraction {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        self.numerator()
            .to_signed_bytes_le()
            .serialize_with_mode(&mut writer, compress)?;
        self.denominator()
            .to_signed_bytes_le()
            .serialize_with_mode(&mut writer, compress)?;
        Ok(())
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.numerator().to_signed_bytes_le().serialized_size(compress)
            + self.denominator().to_signed_bytes_le().serialized_size(compress)
    }
}

impl Valid for Fraction {
    fn check(&self) -> Result<(), SerializationError> {
        let canonical = self.denominator().is_positive()
            && self.numerator().gcd(self.denominator()).is_one();
        if canonical {
            Ok(())
        } else {
            Err(SerializationError::InvalidData)
        }
    }
}

impl CanonicalDeserialize for Fraction {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let numerator = Vec::<u8>::deserialize_with_mode(&mut reader, compress, validate)?;
        let denominator = Vec::<u8>::deserialize_with_mode(&mut reader, compress, validate)?;
        Fraction::new(
            BigInt::from_signed_bytes_le(&numerator),
            BigInt::from_signed_bytes_le(&denominator),
        )
        .map_err(|_| SerializationError::InvalidData)
    }
}

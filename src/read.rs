use std::path::{Path, PathBuf};

use kwix::{
    error::{ConfigError, Error, IoError},
    normalizer::Stopwords,
};

use tokio::{fs::File, io::AsyncReadExt};

#[derive(Debug, Default)]
pub struct FileReader {
    inner: Option<File>,
    path: PathBuf,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path_buf = path.as_ref().to_path_buf();

        match File::open(&path_buf).await {
            Ok(file) => {
                self.inner = Some(file);
                self.path = path_buf;
                Ok(())
            }
            Err(error) => Err(ConfigError::File(error.kind()).into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_into(&mut self, buffer: &mut String) -> Result<(), Error> {
        match &mut self.inner {
            Some(reader) => reader
                .read_to_string(buffer)
                .await
                .map(|_| ())
                .map_err(|error| IoError::File(error.kind()).into()),

            None => Err(IoError::Reader(std::io::ErrorKind::InvalidInput).into()),
        }
    }
}

/// Reads one document file into memory.
pub async fn read_document<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let mut reader = FileReader::new();
    reader.open(path).await?;

    let mut buffer = String::new();
    reader.read_into(&mut buffer).await?;
    Ok(buffer)
}

/// Reads the document manifest: one document path per non-empty line.
pub async fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>, Error> {
    let buffer = read_document(path).await?;

    Ok(buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Reads the noise-word file: whitespace-separated words.
pub async fn load_noise_words<P: AsRef<Path>>(path: P) -> Result<Stopwords, Error> {
    let buffer = read_document(path).await?;
    Ok(Stopwords::new(buffer.split_whitespace()))
}

#[cfg(test)]
mod tests {
    use kwix::error::{ConfigError, Error};

    use crate::read::{load_manifest, load_noise_words, read_document, FileReader};

    #[tokio::test]
    async fn test_reader_file_open() {
        let path = "tests/data/doc1.txt".to_string();

        let mut buffer = String::new();
        let mut reader = FileReader::new();

        reader.open(path).await.unwrap();
        reader.read_into(&mut buffer).await.unwrap();

        assert!(buffer.contains("deep"));
    }

    #[tokio::test]
    async fn test_reader_missing_file() {
        let mut reader = FileReader::new();
        let outcome = reader.open("tests/data/no-such-file.txt").await;

        assert!(matches!(
            outcome,
            Err(Error::Config(ConfigError::File(
                std::io::ErrorKind::NotFound
            )))
        ));
    }

    #[tokio::test]
    async fn test_reader_read_before_open() {
        let mut buffer = String::new();
        let mut reader = FileReader::new();

        assert!(reader.read_into(&mut buffer).await.is_err());
    }

    #[tokio::test]
    async fn test_load_manifest() {
        let manifest = load_manifest("tests/data/docs.txt").await.unwrap();

        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest[0].to_str(), Some("tests/data/doc1.txt"));
    }

    #[tokio::test]
    async fn test_load_noise_words() {
        let stopwords = load_noise_words("tests/data/noisewords.txt").await.unwrap();

        assert!(stopwords.contains("of"));
        assert!(stopwords.contains("the"));
        assert!(!stopwords.contains("deep"));
    }

    #[tokio::test]
    async fn test_read_document() {
        let buffer = read_document("tests/data/doc2.txt").await.unwrap();
        assert!(buffer.contains("world"));
    }
}

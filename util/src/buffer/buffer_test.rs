use super::*;

#[tokio::test]
async fn test_buffer_write_read() -> Result<(), Error> {
    let buffer = Buffer::new(0, 0);
    let mut packet = vec![0u8; 4];

    let n = buffer.write(&[0, 1]).await?;
    assert_eq!(n, 2, "n must be 2");

    let n = buffer.read(&mut packet, None).await?;
    assert_eq!(n, 2, "n must be 2");
    assert_eq!(&packet[..2], &[0, 1]);

    Ok(())
}

#[tokio::test]
async fn test_buffer_close() -> Result<(), Error> {
    let buffer = Buffer::new(0, 0);
    buffer.write(&[0, 1]).await?;
    buffer.close().await;

    assert!(buffer.is_closed().await);

    // Data written before close can still be drained.
    let mut packet = vec![0u8; 4];
    let n = buffer.read(&mut packet, None).await?;
    assert_eq!(n, 2);

    // Once drained, further reads observe the closed buffer.
    let result = buffer.read(&mut packet, None).await;
    assert_eq!(result, Err(ERR_BUFFER_CLOSED.clone()));

    // Writes are rejected once closed.
    let result = buffer.write(&[2, 3]).await;
    assert_eq!(result, Err(ERR_BUFFER_CLOSED.clone()));

    Ok(())
}

#[tokio::test]
async fn test_buffer_limit_count() -> Result<(), Error> {
    let buffer = Buffer::new(1, 0);
    buffer.write(&[0, 1]).await?;

    let result = buffer.write(&[2, 3]).await;
    assert_eq!(result, Err(ERR_BUFFER_FULL.clone()));
    assert_eq!(buffer.count().await, 1);

    Ok(())
}

#[tokio::test]
async fn test_buffer_limit_size() -> Result<(), Error> {
    let buffer = Buffer::new(0, 4);
    let result = buffer.write(&[0, 1, 2, 3]).await;
    assert_eq!(result, Err(ERR_BUFFER_FULL.clone()));

    Ok(())
}

#[tokio::test]
async fn test_buffer_short_read() -> Result<(), Error> {
    let buffer = Buffer::new(0, 0);
    buffer.write(&[0, 1, 2, 3]).await?;

    let mut packet = vec![0u8; 2];
    let result = buffer.read(&mut packet, None).await;
    assert_eq!(result, Err(ERR_BUFFER_SHORT.clone()));

    Ok(())
}

#[tokio::test]
async fn test_buffer_packet_too_big() -> Result<(), Error> {
    let buffer = Buffer::new(0, 0);
    let big = vec![0u8; 0x10000];
    let result = buffer.write(&big).await;
    assert_eq!(result, Err(ERR_PACKET_TOO_BIG.clone()));

    Ok(())
}

#[tokio::test]
async fn test_buffer_grow_across_many_writes() -> Result<(), Error> {
    let buffer = Buffer::new(0, 0);
    for i in 0..1000u16 {
        let data = i.to_be_bytes();
        buffer.write(&data).await?;
    }

    for i in 0..1000u16 {
        let mut packet = vec![0u8; 2];
        let n = buffer.read(&mut packet, None).await?;
        assert_eq!(n, 2);
        assert_eq!(u16::from_be_bytes([packet[0], packet[1]]), i);
    }

    Ok(())
}

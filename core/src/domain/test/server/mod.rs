mod mock_test;
